//! Text helper functions

/// Reading speed used for estimates
const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time of a body, rounded up to whole minutes
///
/// # Examples
/// ```ignore
/// reading_time("one two three") // -> "1 min read"
/// ```
pub fn reading_time(content: &str) -> String {
    // An empty body still counts as one word
    let words = content.split_whitespace().count().max(1);
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{} min read", minutes)
}
