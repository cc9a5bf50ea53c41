// src/config/mod.rs

//! Optional TOML configuration.
//!
//! - [`model`] holds the serde structs for the file.
//! - [`loader`] reads and validates it through a [`crate::fs::FileSystem`].
//! - [`validate`] turns a `RawConfigFile` into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, OutputSection, ParseSection, RawConfigFile};
