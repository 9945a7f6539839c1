//! Values supplied up front on the command line with `--set NAME=VALUE`.

use std::collections::HashMap;
use tracing::debug;

use crate::application::{CollectError, ValueCollector};
use crate::core::templates::{Variable, VariableKind};

/// Parse a `NAME=VALUE` assignment. The value may itself contain `=`.
pub fn parse_assignment(assignment: &str) -> Result<(String, String), CollectError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CollectError::InvalidAssignment(assignment.to_string())),
    }
}

/// Collector that answers from preset values and asks `inner` for the rest.
///
/// Presets must name declared variables, and a preset for a select variable
/// must be one of its options. Only variables without a preset are forwarded.
pub struct PresetCollector<C> {
    presets: HashMap<String, String>,
    inner: C,
}

impl<C: ValueCollector> PresetCollector<C> {
    pub fn new(presets: HashMap<String, String>, inner: C) -> Self {
        Self { presets, inner }
    }

    /// Build from raw `NAME=VALUE` assignments; later assignments win
    pub fn from_assignments<I, S>(assignments: I, inner: C) -> Result<Self, CollectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let presets = assignments
            .into_iter()
            .map(|a| parse_assignment(a.as_ref()))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self::new(presets, inner))
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ValueCollector> ValueCollector for PresetCollector<C> {
    fn collect(&mut self, variables: &[&Variable]) -> Result<HashMap<String, String>, CollectError> {
        if let Some(unknown) = self
            .presets
            .keys()
            .find(|name| !variables.iter().any(|v| v.name() == name.as_str()))
        {
            return Err(CollectError::UnknownVariable(unknown.clone()));
        }

        let mut values = HashMap::new();
        let mut remaining = Vec::new();

        for &variable in variables {
            match self.presets.get(variable.name()) {
                Some(value) => {
                    if variable.kind() == VariableKind::Select
                        && !variable.options().iter().any(|o| o == value)
                    {
                        return Err(CollectError::InvalidOption {
                            name: variable.name().to_string(),
                            value: value.clone(),
                            options: variable.options().to_vec(),
                        });
                    }
                    values.insert(variable.name().to_string(), value.clone());
                }
                None => remaining.push(variable),
            }
        }

        debug!(
            preset = values.len(),
            prompted = remaining.len(),
            "Collecting variable values"
        );

        if !remaining.is_empty() {
            values.extend(self.inner.collect(&remaining)?);
        }

        Ok(values)
    }
}
