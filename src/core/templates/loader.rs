//! Template set loading.
//!
//! A load resolves one source out of an ordered list of candidate names,
//! decodes it and validates every entry. Invalid entries never block valid
//! ones: they are set aside together with their issues so callers can report
//! them, and the remaining templates keep their declaration order.

use tracing::{debug, info, warn};

use super::decode::decode;
use super::store::TemplateStore;
use super::types::{RawTemplate, Template};
use super::validate::ValidationIssue;
use crate::core::error::{Error, Result};

/// Source names tried by [`load_default`], in priority order
pub const CANDIDATE_SOURCES: [&str; 2] = ["comtemplate.yml", "comtemplate.yaml"];

/// A template entry that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTemplate {
    /// Position of the entry in its source
    pub index: usize,
    /// Name as written in the source; may be empty
    pub name: String,
    pub issues: Vec<ValidationIssue>,
}

/// The outcome of a load: accepted templates plus rejected entries.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    source: Option<String>,
    templates: Vec<Template>,
    rejected: Vec<RejectedTemplate>,
}

impl TemplateSet {
    /// Validate decoded records and partition them into accepted and rejected
    pub fn from_raw(raw: Vec<RawTemplate>) -> Self {
        let mut set = Self::default();

        for (index, entry) in raw.into_iter().enumerate() {
            let name = entry.name.clone();
            match Template::from_raw(entry, index) {
                Ok(template) => {
                    if set.find(template.name()).is_some() {
                        warn!(
                            template = %template.name(),
                            index,
                            "Duplicate template name; the first definition is used"
                        );
                    }
                    set.templates.push(template);
                }
                Err(issues) => {
                    for issue in &issues {
                        warn!(template = %name, "{issue}");
                    }
                    set.rejected.push(RejectedTemplate {
                        index,
                        name,
                        issues,
                    });
                }
            }
        }

        set
    }

    /// Name of the source this set was loaded from, if it came from a store
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Valid templates in declaration order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Entries that failed validation, in declaration order
    pub fn rejected(&self) -> &[RejectedTemplate] {
        &self.rejected
    }

    /// Find a template by name; the first definition wins on duplicates
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn into_templates(self) -> Vec<Template> {
        self.templates
    }
}

/// Decode and validate a single in-memory source
pub fn parse_templates(source: &str) -> Result<TemplateSet> {
    Ok(TemplateSet::from_raw(decode(source)?))
}

/// Load templates from the first usable candidate in `store`.
///
/// A candidate is usable when it exists, can be read and decodes. The first
/// usable candidate is used exclusively; later ones are never merged in.
/// Candidates that exist but cannot be read or decoded are logged and skipped.
///
/// # Errors
///
/// Returns [`Error::NoSourceFound`] when no candidate is usable. A usable
/// source whose entries all fail validation is a successful, empty load.
pub fn load_from<S>(store: &S, candidates: &[&str]) -> Result<TemplateSet>
where
    S: TemplateStore + ?Sized,
{
    for &candidate in candidates {
        let content = match store.read(candidate) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(candidate, "Template source not found");
                continue;
            }
            Err(e) => {
                warn!(candidate, error = %e, "Failed to read template source");
                continue;
            }
        };

        let raw = match decode(&content) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(candidate, error = %e, "Template source is not usable");
                continue;
            }
        };

        let mut set = TemplateSet::from_raw(raw);
        set.source = Some(candidate.to_string());

        info!(
            source = candidate,
            valid = set.templates.len(),
            rejected = set.rejected.len(),
            "Loaded templates"
        );
        return Ok(set);
    }

    Err(Error::NoSourceFound {
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    })
}

/// Load templates from the standard candidate names
pub fn load_default<S>(store: &S) -> Result<TemplateSet>
where
    S: TemplateStore + ?Sized,
{
    load_from(store, &CANDIDATE_SOURCES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::store::memory::MemoryStore;
    use crate::core::templates::validate::ValidationError;
    use tracing_test::traced_test;

    const TWO_TEMPLATES: &str = r#"
- name: First
  text: "%{title}"
  variables:
    - name: title
- name: Second
  text: "[%{id}] %{title}"
  variables:
    - name: id
    - name: title
"#;

    #[test]
    fn test_parse_keeps_declaration_order() {
        let set = parse_templates(TWO_TEMPLATES).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.templates()[0].name(), "First");
        assert_eq!(set.templates()[1].name(), "Second");
        assert!(set.rejected().is_empty());
        assert!(set.source().is_none());
    }

    #[test]
    fn test_invalid_entries_do_not_block_valid_ones() {
        let source = r#"
- name: good
  text: "%{a}"
  variables:
    - name: a
- name: bad
  text: "no tokens"
  variables:
    - name: a
- name: ""
  text: ""
- name: also good
  text: plain
"#;
        let set = parse_templates(source).unwrap();

        let names: Vec<_> = set.templates().iter().map(Template::name).collect();
        assert_eq!(names, vec!["good", "also good"]);

        assert_eq!(set.rejected().len(), 2);
        assert_eq!(set.rejected()[0].index, 1);
        assert_eq!(set.rejected()[0].name, "bad");
        assert_eq!(
            set.rejected()[0].issues[0].error,
            ValidationError::UnusedVariable {
                name: "a".to_string()
            }
        );
        assert_eq!(set.rejected()[1].index, 2);
        assert_eq!(set.rejected()[1].issues.len(), 2);
    }

    #[test]
    fn test_all_invalid_is_an_empty_successful_load() {
        let store = MemoryStore::with(&[("comtemplate.yml", "- name: x\n- text: y\n")]);
        let set = load_default(&store).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.rejected().len(), 2);
        assert_eq!(set.source(), Some("comtemplate.yml"));
    }

    #[test]
    fn test_find_first_match_wins() {
        let source = r#"
- name: dup
  description: first
  text: one
- name: dup
  description: second
  text: two
"#;
        let set = parse_templates(source).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.find("dup").unwrap().description(), "first");
        assert!(set.find("missing").is_none());
    }

    #[test]
    fn test_load_prefers_first_candidate() {
        let store = MemoryStore::with(&[
            ("comtemplate.yml", "- name: from yml\n  text: a\n"),
            ("comtemplate.yaml", "- name: from yaml\n  text: b\n"),
        ]);

        let set = load_default(&store).unwrap();
        assert_eq!(set.source(), Some("comtemplate.yml"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.templates()[0].name(), "from yml");
    }

    #[test]
    fn test_load_falls_back_to_second_candidate() {
        let store = MemoryStore::with(&[("comtemplate.yaml", TWO_TEMPLATES)]);

        let set = load_default(&store).unwrap();
        assert_eq!(set.source(), Some("comtemplate.yaml"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_load_skips_undecodable_candidate() {
        let store = MemoryStore::with(&[
            ("comtemplate.yml", "- name: [broken\n"),
            ("comtemplate.yaml", TWO_TEMPLATES),
        ]);

        let set = load_default(&store).unwrap();
        assert_eq!(set.source(), Some("comtemplate.yaml"));
        assert_eq!(set.templates()[0].name(), "First");
        assert!(logs_contain("Template source is not usable"));
    }

    #[test]
    fn test_load_no_usable_source() {
        let store = MemoryStore::with(&[("comtemplate.yml", "{{{ not yaml")]);

        let err = load_default(&store).unwrap_err();
        match err {
            Error::NoSourceFound { candidates } => {
                assert_eq!(candidates, vec!["comtemplate.yml", "comtemplate.yaml"]);
            }
            other => panic!("Expected NoSourceFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_custom_candidates() {
        let store = MemoryStore::with(&[("team.yml", TWO_TEMPLATES)]);

        assert!(load_default(&store).is_err());
        let set = load_from(&store, &["missing.yml", "team.yml"]).unwrap();
        assert_eq!(set.source(), Some("team.yml"));
    }

    #[test]
    #[traced_test]
    fn test_rejected_templates_are_logged() {
        let set = parse_templates("- name: broken\n  text: \"\"\n").unwrap();
        assert!(set.is_empty());
        assert!(logs_contain("Template 0: text is empty"));
    }
}
