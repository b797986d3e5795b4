use alloc::string::ToString as _;

use crate::errors::RegisterErrorKind;

/// Checks a service name against `[A-Za-z][A-Za-z0-9_\-.]*`.
///
/// Surrounding whitespace isn't part of the name, see [`validate`].
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|char| char.is_ascii_alphanumeric() || matches!(char, '_' | '-' | '.'))
}

/// Trims the name and validates it, returning the trimmed slice.
pub(crate) fn validate(name: &str) -> Result<&str, RegisterErrorKind> {
    let trimmed = name.trim();
    if is_valid_name(trimmed) {
        Ok(trimmed)
    } else {
        Err(RegisterErrorKind::InvalidName { name: name.to_string() })
    }
}
