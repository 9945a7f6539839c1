//! Application layer error types

use std::io;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error(transparent)]
    Collect(#[from] CollectError),
}

/// Errors raised while collecting variable values
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Input ended before a value was given for '{0}'")]
    Aborted(String),

    #[error("Value given for unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("'{value}' is not an option of '{name}' (expected one of: {})", .options.join(", "))]
    InvalidOption {
        name: String,
        value: String,
        options: Vec<String>,
    },

    #[error("Invalid assignment '{0}', expected NAME=VALUE")]
    InvalidAssignment(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
