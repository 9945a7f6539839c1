//! Placeholder substitution.
//!
//! Placeholders are the literal token `%{name}`. There is no nesting and no
//! escaping: any `%{...}` that is not built from a declared variable name is
//! left in the output untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use super::types::Template;
use crate::core::error::{Error, Result};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\{([^{}]*)\}").expect("placeholder pattern is valid"));

/// Build the placeholder token for a variable name
pub fn placeholder_token(name: &str) -> String {
    format!("%{{{name}}}")
}

/// Fill every declared variable of `template` with its value from `values`.
///
/// Variables are replaced one at a time in declaration order, each over the
/// text produced by the previous ones, so a value that itself contains a
/// later variable's token is expanded as well. Every occurrence of a token is
/// replaced.
///
/// # Errors
///
/// Returns [`Error::MissingVariable`] for the first declared variable (in
/// declaration order) that has no entry in `values`. No partial text is
/// returned in that case.
pub fn substitute(template: &Template, values: &HashMap<String, String>) -> Result<String> {
    let mut text = template.text().to_string();

    for variable in template.variables() {
        let value = values
            .get(variable.name())
            .ok_or_else(|| Error::missing_variable(variable.name()))?;

        text = text.replace(&placeholder_token(variable.name()), value);
    }

    debug!(
        template = %template.name(),
        variables = template.variables().len(),
        "Substituted template"
    );

    Ok(text)
}

/// List the distinct placeholder names in `text`, in order of first appearance
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(text) {
        let name = &captures[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholder names in the template's text that no variable declares
pub fn undeclared_placeholders(template: &Template) -> Vec<String> {
    placeholders(template.text())
        .into_iter()
        .filter(|name| template.variable(name).is_none())
        .collect()
}
