//! Reduce an opaque response body to a short excerpt

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 160;

/// Collapse whitespace runs to single spaces, trim, and keep at most
/// `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(max_chars).collect();
    truncated.trim_end().to_string()
}
