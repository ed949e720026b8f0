// src/exec/mod.rs

//! Process supervision layer.
//!
//! This module owns everything that touches child processes, using
//! `tokio::process::Command`, and reports lifecycle transitions back to the
//! orchestration runtime via `RuntimeEvent`s.
//!
//! - [`supervisor`] owns the primary `flutter run` process and its stdin.
//! - [`monitor`] scans the primary's stdout for lifecycle markers.
//! - [`attach`] runs the one-shot `flutter attach` session.

pub mod attach;
pub mod monitor;
pub mod supervisor;

pub use attach::spawn_attach;
pub use monitor::{FINISHED_MARKER, Observation, OutputScan, READY_MARKER, spawn_stdout_monitor};
pub use supervisor::{LaunchSpec, RELOAD_COMMAND, Supervisor};
