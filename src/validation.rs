use crate::error::RegistryError;

/// Boundary guard for a required text field.
///
/// Returns the value to store. With `trim` set, surrounding whitespace is
/// dropped and a whitespace-only value counts as empty.
pub(crate) fn require_text(
    kind: &'static str,
    field: &'static str,
    value: Option<&str>,
    trim: bool,
) -> Result<String, RegistryError> {
    let value = value.map(|v| if trim { v.trim() } else { v });
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => {
            tracing::debug!(kind, field, "rejected: missing or empty field");
            Err(RegistryError::MissingField { kind, field })
        }
    }
}
