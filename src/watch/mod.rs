// src/watch/mod.rs

//! File watching and change classification.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Reducing raw notification events to the change kinds the reload policy
//!   cares about.
//!
//! It does **not** know about process supervision; it only turns filesystem
//! changes into runtime events.

pub mod events;
pub mod watcher;

pub use events::ChangeKind;
pub use watcher::{WatcherHandle, spawn_watcher};
