//! Starter template source written by `ct init`.

use tracing::info;

use super::store::TemplateStore;
use crate::core::error::Result;

/// Name of the source file created by [`generate_default`] by default
pub const DEFAULT_SOURCE: &str = "comtemplate.yml";

/// Starter templates covering every variable type
pub const DEFAULT_TEMPLATES: &str = r#"# Commit message templates for ct.
#
# Each template has a name, an optional description, a text containing
# %{variable} placeholders and the list of variables used in that text.
# Variable types: input (single line, the default), text (multiple lines)
# and select (one of the listed options).

- name: simple
  description: Simple commit message
  text: |
    %{summary}

    %{body}
  variables:
    - name: summary
    - name: body
      type: text

- name: typed
  description: Commit message with type
  text: |
    [%{type}] %{summary}

    %{body}
  variables:
    - name: type
      type: select
      options:
        - ✨ feat
        - 🐛 fix
        - ♻️ refactor
        - 📝 docs
        - 🎨 style
        - ✅ test
        - ⚡️ perf
    - name: summary
    - name: body
      type: text
"#;

/// Write the starter templates to `target` in `store`.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`](crate::core::Error::AlreadyExists) if
/// `target` is already present; nothing is written in that case.
pub fn generate_default<S>(store: &S, target: &str) -> Result<()>
where
    S: TemplateStore + ?Sized,
{
    store.create(target, DEFAULT_TEMPLATES)?;
    info!(source = target, "Created default template source");
    Ok(())
}
