//! Template definitions for commit messages and other reusable text.
//!
//! This module covers the whole life of a template:
//! - decoding a YAML source into raw records ([`decode`])
//! - validating each record and converting it into a typed [`Template`]
//! - loading the first usable source out of a list of candidates
//! - substituting `%{name}` placeholders with supplied values
//! - writing a starter source for new users

pub mod decode;
pub mod defaults;
pub mod loader;
pub mod store;
pub mod substitute;
pub mod types;
pub mod validate;

pub use decode::*;
pub use defaults::*;
pub use loader::*;
pub use store::*;
pub use substitute::*;
pub use types::*;
pub use validate::*;
