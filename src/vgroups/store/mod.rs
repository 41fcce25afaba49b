//! # Storage Layer
//!
//! A [`SceneStore`] loads and saves the whole [`Scene`]: objects with their
//! properties (tags live in there), Views, and palette state. It plays the role
//! a host application plays for the core: owning the objects and persisting
//! them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON scene file.
//!   A missing file loads as an empty scene.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence.
//!
//! Commands load, edit and save in one go. There are no partial writes.

use crate::error::Result;
use crate::model::Scene;

pub mod fs;
pub mod memory;

/// Abstract interface for scene storage.
pub trait SceneStore {
    /// Load the scene (empty if nothing was saved yet)
    fn load_scene(&self) -> Result<Scene>;

    /// Replace the stored scene
    fn save_scene(&mut self, scene: &Scene) -> Result<()>;

    /// Human-readable location, for messages
    fn location(&self) -> String;
}
