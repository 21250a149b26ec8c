//! Rough token accounting

/// Whitespace-separated word count, used as a cheap token estimate
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
