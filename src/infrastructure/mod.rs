//! Infrastructure layer - concrete implementations of domain ports

pub mod prompt;
pub mod templates;

pub use prompt::*;
pub use templates::*;
