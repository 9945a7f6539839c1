//! Template and variable records.
//!
//! Two layers live here: the raw records produced by the decoder, which keep
//! every field exactly as written in the source, and the typed [`Template`]
//! that only exists once a raw record has passed validation.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fmt;
use std::str::FromStr;

use super::validate::{ValidationIssue, validate};

/// A template entry as decoded from the source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTemplate {
    /// Template name, used to select it from the command line
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub name: String,

    /// Optional one-line description shown by `ct list`
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub description: String,

    /// Template body containing `%{name}` placeholders
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub text: String,

    /// Declared variables, in display order
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub variables: Vec<RawVariable>,
}

/// A variable entry as decoded from the source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawVariable {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub name: String,

    /// Unparsed type identifier; empty means free-text input
    #[serde(default, rename = "type", deserialize_with = "deserialize_scalar")]
    pub kind: String,

    #[serde(default, deserialize_with = "deserialize_scalar_list")]
    pub options: Vec<String>,
}

/// How a variable's value is collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableKind {
    /// Single line of free text
    #[default]
    Input,
    /// Multi-line block of text
    Text,
    /// One of a fixed list of options
    Select,
}

impl VariableKind {
    /// Returns the identifier used for this kind in template sources
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Text => "text",
            Self::Select => "select",
        }
    }

    /// Returns an iterator over all variable kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use VariableKind::*;
        [Input, Text, Select].into_iter()
    }
}

impl FromStr for VariableKind {
    type Err = String;

    /// Identifiers are case-sensitive; the empty string is free-text input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "input" => Ok(VariableKind::Input),
            "text" => Ok(VariableKind::Text),
            "select" => Ok(VariableKind::Select),
            _ => Err(format!("Unknown variable type: {s}")),
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, immutable template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    description: String,
    text: String,
    variables: Vec<Variable>,
}

/// A validated variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    kind: VariableKind,
    options: Vec<String>,
}

impl Template {
    /// Validate a raw record and convert it into a typed template.
    ///
    /// `index` is the position of the record in its source and is only used to
    /// tag the returned issues. A record with any issue is rejected whole.
    pub fn from_raw(raw: RawTemplate, index: usize) -> Result<Self, Vec<ValidationIssue>> {
        let issues = validate(&raw, index);
        if !issues.is_empty() {
            return Err(issues);
        }

        let variables = raw
            .variables
            .into_iter()
            .map(|v| Variable {
                kind: v.kind.parse().unwrap_or_default(),
                name: v.name,
                options: v.options,
            })
            .collect();

        Ok(Self {
            name: raw.name,
            description: raw.description,
            text: raw.text,
            variables,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a declared variable by name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Allowed values; only meaningful for [`VariableKind::Select`]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Deserialize a scalar (string, number, bool or null) as its textual form.
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).map_err(serde::de::Error::custom)
}

/// Deserialize a list of scalars, treating null as an empty list.
fn deserialize_scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(seq) => seq
            .into_iter()
            .map(|item| scalar_to_string(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Err(serde::de::Error::custom("Expected a list of strings")),
    }
}

/// Deserialize a value, treating an explicit null as the type's default.
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_to_string(value: Value) -> Result<String, &'static str> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err("Expected a string"),
    }
}
