// src/engine/mod.rs

//! Orchestration engine for flicker.
//!
//! This module owns the main runtime event loop that reacts to:
//! - file-watch changes (reload trigger)
//! - app lifecycle markers from the stdout monitor
//! - shutdown signals

pub mod runtime;

pub use runtime::{Runtime, RuntimeEvent};
