//! # Host Boundary
//!
//! vgroups does not own scene objects. A host application (a 3D editor, a
//! scene file, a test fixture) owns them and exposes just enough for the core
//! to work with:
//!
//! - [`PropertyHost`]: a string-keyed property slot per object, where the tag
//!   store keeps its encoding.
//! - [`SceneEntity`]: a stable, scene-unique name so scans can report *which*
//!   objects matched without borrowing them.
//!
//! Everything in [`crate::tags`], [`crate::scan`] and [`crate::views`] is generic
//! over these traits. [`crate::model::SceneObject`] is the implementation the
//! bundled scene file uses.

/// Per-object string property storage.
pub trait PropertyHost {
    /// Returns the string stored under `key`, if any.
    ///
    /// Hosts that store non-string values under a key should return `None`
    /// for it rather than coercing.
    fn property(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, replacing whatever was there.
    fn set_property(&mut self, key: &str, value: String);
}

/// An object that lives in a scene and can be identified by name.
pub trait SceneEntity: PropertyHost {
    fn name(&self) -> &str;
}
