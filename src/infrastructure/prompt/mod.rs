//! Interactive value collection

pub mod line_prompter;

pub use line_prompter::*;
