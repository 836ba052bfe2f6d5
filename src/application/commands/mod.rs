pub mod articles;
pub mod users;

use crate::application::error::ValidationErrors;

/// Required-field check shared by the `from_api` command factories: every
/// listed key must be present and non-empty after trimming. On success the
/// trimmed values come back in declaration order; on failure the error names
/// the missing fields in that same order.
pub(crate) fn required_fields<'a, const N: usize>(
    fields: [(&'static str, Option<&'a str>); N],
) -> Result<[&'a str; N], ValidationErrors> {
    let mut missing = Vec::new();
    let mut values = [""; N];

    for (slot, (name, value)) in values.iter_mut().zip(fields) {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => *slot = trimmed,
            _ => missing.push(name),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(ValidationErrors::missing_fields(&missing))
    }
}
