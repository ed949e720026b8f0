// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlickerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Failed to launch process: {0}")]
    Launch(String),

    #[error("No active process")]
    NoActiveProcess,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FlickerError>;
