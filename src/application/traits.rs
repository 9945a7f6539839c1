//! Port interfaces for the application layer

use std::collections::HashMap;

use crate::application::CollectError;
use crate::core::templates::{Template, Variable};

/// Source of values for template variables, usually the user at a terminal
pub trait ValueCollector {
    /// Obtain a value for each of `variables`.
    ///
    /// Implementations must ask for every variable given, honoring its
    /// [`VariableKind`](crate::core::templates::VariableKind), and fail rather
    /// than return a partial mapping.
    fn collect(&mut self, variables: &[&Variable]) -> Result<HashMap<String, String>, CollectError>;

    /// Obtain a value for every variable declared by `template`
    fn collect_template(
        &mut self,
        template: &Template,
    ) -> Result<HashMap<String, String>, CollectError> {
        let variables: Vec<&Variable> = template.variables().iter().collect();
        self.collect(&variables)
    }
}
