//! Application layer - orchestrates use cases over the template core

pub mod errors;
pub mod presets;
pub mod template_management;
pub mod traits;

pub use errors::*;
pub use presets::*;
pub use template_management::*;
pub use traits::*;
