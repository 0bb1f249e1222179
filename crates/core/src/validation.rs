//! Input validation for catalog entries.

use crate::constants::MAX_SYMPTOM_ID_LEN;
use crate::{TriageError, TriageResult};

/// Validates that a symptom id is a short, plain ASCII token.
///
/// Ids travel through selection events and command lines, so they are restricted to
/// alphanumerics, `-` and `_`.
///
/// # Errors
///
/// Returns [`TriageError::InvalidInput`] if the id is too long or contains other characters.
pub fn validate_symptom_id(id: &str) -> TriageResult<()> {
    if id.len() > MAX_SYMPTOM_ID_LEN {
        return Err(TriageError::InvalidInput(format!(
            "symptom id exceeds maximum length of {} characters",
            MAX_SYMPTOM_ID_LEN
        )));
    }

    let ok = id
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_'));

    if !ok {
        return Err(TriageError::InvalidInput(format!(
            "symptom id '{}' contains invalid characters (only alphanumeric, '-', '_' allowed)",
            id
        )));
    }

    Ok(())
}
