//! YAML decoding of template sources.

use tracing::debug;

use super::types::RawTemplate;
use crate::core::error::Result;

/// Decode a template source into raw, unvalidated records.
///
/// The source is a YAML sequence of mappings. Unknown fields are ignored and
/// absent optional fields take their defaults. A source with no content (or
/// only comments, or an explicit null) decodes to an empty list.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::core::Error::Decode) when the source is
/// not well-formed YAML or does not have the expected shape.
pub fn decode(source: &str) -> Result<Vec<RawTemplate>> {
    if is_blank(source) {
        debug!("Template source is empty");
        return Ok(Vec::new());
    }

    let templates: Option<Vec<RawTemplate>> = serde_yaml::from_str(source)?;
    let templates = templates.unwrap_or_default();

    debug!(count = templates.len(), "Decoded template source");
    Ok(templates)
}

fn is_blank(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
