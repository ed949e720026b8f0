// src/config/mod.rs

//! Configuration loading and validation for flicker.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or write the default one (`loader.rs`).
//! - Validate basic invariants like a non-empty device (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, write_default};
pub use model::{ConfigFile, WatchSection};
pub use validate::validate_config;
