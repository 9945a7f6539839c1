//! Error handling for the comtemplate core.
//!
//! This module defines the main error type `Error` used by the decoder, the
//! template set loader, the substitution engine and the default generator,
//! along with a convenient `Result` type alias.
//!
//! Validation problems are not errors: they are collected as
//! [`ValidationIssue`](crate::core::templates::ValidationIssue) values and
//! decide whether a template is kept, without aborting the load.
//!
//! # Examples
//!
//! ```
//! use comtemplate::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::missing_variable("body"))
//! }
//!
//! assert_eq!(
//!     might_fail().unwrap_err().to_string(),
//!     "No value supplied for variable 'body'"
//! );
//! ```

use thiserror::Error;

/// Result type for comtemplate core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for comtemplate core operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not well-formed template YAML
    #[error("Failed to decode templates: {0}")]
    Decode(String),

    /// None of the candidate sources exist or decode
    #[error("No usable template source found (tried {})", .candidates.join(", "))]
    NoSourceFound { candidates: Vec<String> },

    /// A declared variable had no value at substitution time
    #[error("No value supplied for variable '{name}'")]
    MissingVariable { name: String },

    /// The default generation target is already present
    #[error("File {name} already exists")]
    AlreadyExists { name: String },
}

impl Error {
    /// Create a new decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new missing variable error
    pub fn missing_variable<S: Into<String>>(name: S) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Create a new already exists error
    pub fn already_exists<S: Into<String>>(name: S) -> Self {
        Self::AlreadyExists { name: name.into() }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
