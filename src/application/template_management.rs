//! Template management use cases

use std::fmt::Write as _;
use tracing::info;

use crate::application::{ApplicationError, ValueCollector};
use crate::core::templates::{
    DEFAULT_SOURCE, TemplateSet, TemplateStore, VariableKind, generate_default, load_default,
    substitute, undeclared_placeholders,
};

/// Use case for listing all valid templates
pub struct ListTemplatesUseCase<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> ListTemplatesUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<String, ApplicationError> {
        let set = load_default(&self.store)?;

        if set.is_empty() {
            return Ok(format!(
                "No valid templates found in {}",
                set.source().unwrap_or("template source")
            ));
        }

        let mut output = String::from("Available templates:\n");
        for template in set.templates() {
            if template.description().is_empty() {
                let _ = writeln!(output, "  {}", template.name());
            } else {
                let _ = writeln!(output, "  {}: {}", template.name(), template.description());
            }
        }

        output.push_str("\nUse 'ct <template>' to fill a template");
        Ok(output)
    }
}

/// Use case for showing template information
pub struct TemplateInfoUseCase<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> TemplateInfoUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self, name: &str) -> Result<String, ApplicationError> {
        let set = load_default(&self.store)?;
        let template = set
            .find(name)
            .ok_or_else(|| ApplicationError::TemplateNotFound(name.to_string()))?;

        let mut output = format!("Template: {}\n", template.name());
        if !template.description().is_empty() {
            let _ = writeln!(output, "Description: {}", template.description());
        }

        let _ = writeln!(output, "\nVariables: {} total", template.variables().len());
        for variable in template.variables() {
            let _ = writeln!(output, "  - {} ({})", variable.name(), variable.kind());
            if variable.kind() == VariableKind::Select {
                for option in variable.options() {
                    let _ = writeln!(output, "      * {option}");
                }
            }
        }

        let undeclared = undeclared_placeholders(template);
        if !undeclared.is_empty() {
            let _ = writeln!(
                output,
                "\nUndeclared placeholders (left as-is): {}",
                undeclared.join(", ")
            );
        }

        output.push_str("\nText:\n");
        output.push_str(template.text());
        Ok(output)
    }
}

/// Result of checking a template source
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub output: String,
    /// True when no template was rejected
    pub ok: bool,
}

/// Use case for validating the template source and reporting every issue
pub struct CheckTemplatesUseCase<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> CheckTemplatesUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<CheckReport, ApplicationError> {
        let set = load_default(&self.store)?;
        Ok(Self::report(&set))
    }

    fn report(set: &TemplateSet) -> CheckReport {
        let source = set.source().unwrap_or("template source");
        let mut output = format!(
            "{source}: {} valid, {} rejected\n",
            set.len(),
            set.rejected().len()
        );

        for rejected in set.rejected() {
            let label = if rejected.name.is_empty() {
                format!("#{}", rejected.index)
            } else {
                format!("'{}'", rejected.name)
            };
            let _ = writeln!(output, "\nRejected template {label}:");
            for issue in &rejected.issues {
                let _ = writeln!(output, "  {issue}");
            }
        }

        for template in set.templates() {
            let undeclared = undeclared_placeholders(template);
            if !undeclared.is_empty() {
                let _ = writeln!(
                    output,
                    "\nNote: '{}' has undeclared placeholders: {}",
                    template.name(),
                    undeclared.join(", ")
                );
            }
        }

        CheckReport {
            output,
            ok: set.rejected().is_empty(),
        }
    }
}

/// Use case for creating the starter template source
pub struct InitTemplatesUseCase<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> InitTemplatesUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create the default source, returning its name
    pub fn execute(&self) -> Result<&'static str, ApplicationError> {
        generate_default(&self.store, DEFAULT_SOURCE)?;
        Ok(DEFAULT_SOURCE)
    }
}

/// Use case for filling a template with collected values
pub struct ApplyTemplateUseCase<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> ApplyTemplateUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn execute<C: ValueCollector>(
        &self,
        name: &str,
        collector: &mut C,
    ) -> Result<String, ApplicationError> {
        let set = load_default(&self.store)?;
        let template = set
            .find(name)
            .ok_or_else(|| ApplicationError::TemplateNotFound(name.to_string()))?;

        info!(template = %template.name(), "Using template");
        let values = collector.collect_template(template)?;
        Ok(substitute(template, &values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CollectError;
    use crate::core::Error;
    use crate::core::templates::Variable;
    use crate::core::templates::store::memory::MemoryStore;
    use std::collections::HashMap;

    const SOURCE: &str = r#"
- name: simple
  description: Simple commit message
  text: "%{summary}\n\n%{body}"
  variables:
    - name: summary
    - name: body
      type: text
- name: typed
  text: "[%{type}] %{summary} %{ticket}"
  variables:
    - name: type
      type: select
      options: [feat, fix]
    - name: summary
- name: broken
  text: "nothing here"
  variables:
    - name: unused
"#;

    fn store() -> MemoryStore {
        MemoryStore::with(&[("comtemplate.yml", SOURCE)])
    }

    struct FixedCollector(HashMap<String, String>);

    impl ValueCollector for FixedCollector {
        fn collect(
            &mut self,
            variables: &[&Variable],
        ) -> Result<HashMap<String, String>, CollectError> {
            Ok(variables
                .iter()
                .filter_map(|v| {
                    self.0
                        .get(v.name())
                        .map(|value| (v.name().to_string(), value.clone()))
                })
                .collect())
        }
    }

    fn fixed(pairs: &[(&str, &str)]) -> FixedCollector {
        FixedCollector(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_list_templates() {
        let output = ListTemplatesUseCase::new(store()).execute().unwrap();
        assert!(output.starts_with("Available templates:\n"));
        assert!(output.contains("  simple: Simple commit message\n"));
        assert!(output.contains("  typed\n"));
        assert!(!output.contains("broken"));
    }

    #[test]
    fn test_list_reports_zero_valid_templates() {
        let store = MemoryStore::with(&[("comtemplate.yml", "- name: only\n")]);
        let output = ListTemplatesUseCase::new(store).execute().unwrap();
        assert_eq!(output, "No valid templates found in comtemplate.yml");
    }

    #[test]
    fn test_list_without_source_fails() {
        let err = ListTemplatesUseCase::new(MemoryStore::default())
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Core(Error::NoSourceFound { .. })
        ));
    }

    #[test]
    fn test_template_info() {
        let output = TemplateInfoUseCase::new(store()).execute("typed").unwrap();
        assert!(output.contains("Template: typed\n"));
        assert!(output.contains("Variables: 2 total"));
        assert!(output.contains("  - type (select)\n      * feat\n      * fix\n"));
        assert!(output.contains("  - summary (input)\n"));
        assert!(output.contains("Undeclared placeholders (left as-is): ticket"));
        assert!(output.ends_with("[%{type}] %{summary} %{ticket}"));
    }

    #[test]
    fn test_template_info_not_found() {
        let err = TemplateInfoUseCase::new(store())
            .execute("broken")
            .unwrap_err();
        assert!(matches!(err, ApplicationError::TemplateNotFound(ref name) if name == "broken"));
    }

    #[test]
    fn test_check_reports_rejected_templates() {
        let report = CheckTemplatesUseCase::new(store()).execute().unwrap();
        assert!(!report.ok);
        assert!(report.output.starts_with("comtemplate.yml: 2 valid, 1 rejected\n"));
        assert!(report.output.contains("Rejected template 'broken':"));
        assert!(
            report
                .output
                .contains("Template 2 - Variable 0: variable unused is not used in text")
        );
        assert!(
            report
                .output
                .contains("Note: 'typed' has undeclared placeholders: ticket")
        );
    }

    #[test]
    fn test_check_clean_source() {
        let store = MemoryStore::with(&[("comtemplate.yml", "- name: a\n  text: b\n")]);
        let report = CheckTemplatesUseCase::new(store).execute().unwrap();
        assert!(report.ok);
        assert_eq!(report.output, "comtemplate.yml: 1 valid, 0 rejected\n");
    }

    #[test]
    fn test_check_labels_unnamed_templates_by_index() {
        let store = MemoryStore::with(&[("comtemplate.yml", "- text: b\n")]);
        let report = CheckTemplatesUseCase::new(store).execute().unwrap();
        assert!(report.output.contains("Rejected template #0:"));
    }

    #[test]
    fn test_init_then_list() {
        let store = MemoryStore::default();
        assert_eq!(
            InitTemplatesUseCase::new(&store).execute().unwrap(),
            "comtemplate.yml"
        );

        let output = ListTemplatesUseCase::new(&store).execute().unwrap();
        assert!(output.contains("simple: Simple commit message"));
        assert!(output.contains("typed: Commit message with type"));
    }

    #[test]
    fn test_init_refuses_existing_source() {
        let store = store();
        let err = InitTemplatesUseCase::new(&store).execute().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Core(Error::AlreadyExists { .. })
        ));
        assert_eq!(store.get("comtemplate.yml").as_deref(), Some(SOURCE));
    }

    #[test]
    fn test_apply_template() {
        let mut collector = fixed(&[("summary", "Add parser"), ("body", "Details")]);
        let text = ApplyTemplateUseCase::new(store())
            .execute("simple", &mut collector)
            .unwrap();
        assert_eq!(text, "Add parser\n\nDetails");
    }

    #[test]
    fn test_apply_missing_value_fails() {
        let mut collector = fixed(&[("summary", "Add parser")]);
        let err = ApplyTemplateUseCase::new(store())
            .execute("typed", &mut collector)
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Core(Error::MissingVariable { ref name }) if name == "type"
        ));
    }

    #[test]
    fn test_apply_unknown_template() {
        let mut collector = fixed(&[]);
        let err = ApplyTemplateUseCase::new(store())
            .execute("nope", &mut collector)
            .unwrap_err();
        assert_eq!(err.to_string(), "Template 'nope' not found");
    }
}
