//! Consistency checks for decoded template records.
//!
//! [`validate`] walks every rule for one record and reports every violation
//! it finds, each tagged with the template index and, when the problem is
//! with a variable, the variable index. It never stops at the first problem.

use std::fmt;
use thiserror::Error;

use super::substitute::placeholder_token;
use super::types::{RawTemplate, VariableKind};

/// A single rule violated by a template record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,

    #[error("text is empty")]
    EmptyText,

    #[error("variable name is empty")]
    EmptyVariableName,

    #[error("variable {name} is not used in text")]
    UnusedVariable { name: String },

    #[error("variable {name} has invalid type {kind}")]
    UnknownVariableType { name: String, kind: String },

    #[error("variable {name} is a select without options")]
    MissingSelectOptions { name: String },
}

/// A validation error located within a template source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Position of the template in its source
    pub template_index: usize,
    /// Position of the variable within the template, for variable-level issues
    pub variable_index: Option<usize>,
    pub error: ValidationError,
}

impl ValidationIssue {
    fn template(template_index: usize, error: ValidationError) -> Self {
        Self {
            template_index,
            variable_index: None,
            error,
        }
    }

    fn variable(template_index: usize, variable_index: usize, error: ValidationError) -> Self {
        Self {
            template_index,
            variable_index: Some(variable_index),
            error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variable_index {
            Some(variable_index) => write!(
                f,
                "Template {} - Variable {}: {}",
                self.template_index, variable_index, self.error
            ),
            None => write!(f, "Template {}: {}", self.template_index, self.error),
        }
    }
}

/// Check one raw template record and return every issue found.
///
/// An empty result means the record is valid.
pub fn validate(template: &RawTemplate, index: usize) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if template.name.is_empty() {
        issues.push(ValidationIssue::template(index, ValidationError::EmptyName));
    }

    if template.text.is_empty() {
        issues.push(ValidationIssue::template(index, ValidationError::EmptyText));
    }

    for (var_index, variable) in template.variables.iter().enumerate() {
        if variable.name.is_empty() {
            issues.push(ValidationIssue::variable(
                index,
                var_index,
                ValidationError::EmptyVariableName,
            ));
        }

        if !template.text.contains(&placeholder_token(&variable.name)) {
            issues.push(ValidationIssue::variable(
                index,
                var_index,
                ValidationError::UnusedVariable {
                    name: variable.name.clone(),
                },
            ));
        }

        match variable.kind.parse::<VariableKind>() {
            Ok(VariableKind::Select) if variable.options.is_empty() => {
                issues.push(ValidationIssue::variable(
                    index,
                    var_index,
                    ValidationError::MissingSelectOptions {
                        name: variable.name.clone(),
                    },
                ));
            }
            Ok(_) => {}
            Err(_) => issues.push(ValidationIssue::variable(
                index,
                var_index,
                ValidationError::UnknownVariableType {
                    name: variable.name.clone(),
                    kind: variable.kind.clone(),
                },
            )),
        }
    }

    issues
}
