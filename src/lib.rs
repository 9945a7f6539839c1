//! comtemplate: reusable commit message templates.
//!
//! Templates are defined in a YAML file (`comtemplate.yml` or
//! `comtemplate.yaml`), validated when loaded, and filled by substituting
//! `%{name}` placeholders with values collected from the user.
//!
//! ```
//! use std::collections::HashMap;
//! use comtemplate::core::templates::{parse_templates, substitute};
//!
//! let set = parse_templates("- name: A\n  text: \"%{x}\"\n  variables:\n    - name: x\n")?;
//! let values = HashMap::from([("x".to_string(), "hello".to_string())]);
//! assert_eq!(substitute(&set.templates()[0], &values)?, "hello");
//! # Ok::<(), comtemplate::core::Error>(())
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod infrastructure;
