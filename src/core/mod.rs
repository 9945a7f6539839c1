//! Core template model: decoding, validation, loading, substitution and the
//! default definition generator.

pub mod error;
pub mod templates;

pub use error::{Error, Result};
