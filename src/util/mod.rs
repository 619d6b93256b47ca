//! Small shared helpers.

/// Normalizes a character name or realm slug into the lookup key the
/// provider's per-character endpoints expect.
///
/// Keys are trimmed and lowercased; display values keep their original
/// casing and are stored untouched.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}
