//! # vgroups Architecture
//!
//! vgroups organizes the objects of a scene with **tags** and **Views**. Objects
//! carry free-form tags; a View is a named grouping defined by a small boolean
//! query over those tags, by hand-picked members, or both at once.
//!
//! Like any library that happens to have a CLI client, the core knows nothing
//! about terminals. Everything below the CLI takes Rust arguments and returns
//! Rust types.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, sets the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, View numbers → positions, loads config      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load scene, edit, save, report                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (tags/, query/, scan.rs, views.rs)                    │
//! │  - Generic over the host traits in host.rs                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SceneStore trait: FileStore, InMemoryStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core Is Host-Agnostic
//!
//! The tag store, query evaluator and View resolver only see objects through
//! [`host::PropertyHost`] and [`host::SceneEntity`]: a string property slot and
//! a unique name. [`model::SceneObject`] is one such host object, persisted by
//! [`store`]; an embedding application can implement the traits on its own
//! types and skip the rest of the crate.
//!
//! ## Module Overview
//!
//! - [`tags`]: Per-object tag storage and tag-name validation
//! - [`query`]: Query grammar, parser, evaluator and validator
//! - [`scan`]: Matching a query or a tag list across many objects
//! - [`views`]: Hybrid View resolution and explicit membership
//! - [`model`]: Scene, object and View types
//! - [`store`]: Scene persistence
//! - [`commands`]: Business logic for each user operation
//! - [`api`]: The facade, entry point for all operations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod query;
pub mod scan;
pub mod store;
pub mod tags;
pub mod views;
