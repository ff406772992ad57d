//! # Display Helpers
//!
//! Small formatting functions shared by the client screens.

/// Shorten `value` to its first `prefix_len` and last `suffix_len` characters
/// joined by `...`.
///
/// Values that would not get shorter are returned unchanged. Counts are in
/// characters, so multi-byte input never splits a code point.
///
/// ```rust
/// use shared::utils::truncate_middle;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_middle(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(truncate_middle("short", 4, 4), "short");
/// ```
pub fn truncate_middle(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = value.chars().count();
    if len <= prefix_len + suffix_len + 3 {
        return value.to_string();
    }

    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(len - suffix_len).collect();
    format!("{prefix}...{suffix}")
}

/// Up to two uppercase initials for an avatar bubble.
///
/// Words are split on whitespace, `_`, `-` and `.`; a single word yields its
/// first letter. Empty input yields `"?"`.
pub fn initials(username: &str) -> String {
    let letters: String = username
        .split(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '.'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}
