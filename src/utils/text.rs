//! Text helpers for form input.

/// Truncates `value` to at most `max_chars` characters.
///
/// Counts Unicode scalar values, matching how the editor's length counters
/// are displayed.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

/// Returns the number of characters in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
