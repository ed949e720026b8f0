// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `flicker`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flicker",
    version,
    about = "Hot-reload a Flutter app when watched files change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Flicker.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Flicker.toml")]
    pub config: String,

    /// Write a default config file and exit without starting the watch loop.
    #[arg(long)]
    pub generate_config: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FLICKER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
