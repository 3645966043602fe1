//! Title parsing

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*\(([^)]+)\)\s*$").expect("static regex must compile")
});

/// Split `Name (Parenthetical)` into the clean name and the parenthetical
///
/// Titles without a trailing parenthetical are returned trimmed with no
/// expansion.
///
/// # Examples
///
/// ```
/// use termbase_extractor::split_title;
///
/// let (name, expansion) = split_title("SQL (Structured Query Language)");
/// assert_eq!(name, "SQL");
/// assert_eq!(expansion.as_deref(), Some("Structured Query Language"));
///
/// assert_eq!(split_title(" Revenue "), ("Revenue".to_string(), None));
/// ```
pub fn split_title(title: &str) -> (String, Option<String>) {
    match TRAILING_PARENTHETICAL.captures(title.trim()) {
        Some(caps) => (caps[1].trim().to_string(), Some(caps[2].trim().to_string())),
        None => (title.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthetical_must_be_trailing() {
        let (name, expansion) = split_title("Cost (of goods) sold");
        assert_eq!(name, "Cost (of goods) sold");
        assert!(expansion.is_none());
    }

    #[test]
    fn test_empty_parenthetical_is_not_split() {
        let (name, expansion) = split_title("Term ()");
        assert_eq!(name, "Term ()");
        assert!(expansion.is_none());
    }

    #[test]
    fn test_inner_whitespace_trimmed() {
        let (name, expansion) = split_title("KPI(  Key Performance Indicator )");
        assert_eq!(name, "KPI");
        assert_eq!(expansion.as_deref(), Some("Key Performance Indicator"));
    }

    #[test]
    fn test_last_parenthetical_wins() {
        let (name, expansion) = split_title("A (B) (C)");
        assert_eq!(name, "A (B)");
        assert_eq!(expansion.as_deref(), Some("C"));
    }
}
