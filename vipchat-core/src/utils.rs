//! Utility functions and helpers

use std::path::PathBuf;

/// Create a safe filename from a storage key
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect()
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis when anything was cut. Counts characters, not bytes, so Thai
/// text is never split mid-glyph. The result never exceeds `max_chars`
/// characters; budgets too small to fit an ellipsis are cut bare.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("zenith_chat_history"), "zenith_chat_history");
        assert_eq!(safe_filename("zenith_chat_chat-17000"), "zenith_chat_chat-17000");
        assert_eq!(safe_filename("key with:colon"), "key_with_colon");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_chars_tiny_budget_stays_within_it() {
        assert_eq!(truncate_chars("hello", 2), "he");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 0), "");
    }

    #[test]
    fn test_truncate_chars_thai() {
        // 10 Thai characters survive a 10-char budget untouched
        let s = "สวัสดีครับผม";
        let out = truncate_chars(s, 12);
        assert_eq!(out, s);
        let cut = truncate_chars(s, 8);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 8);
    }
}
