//! URI slug derivation

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("static regex must compile"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("static regex must compile"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));
static DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("static regex must compile"));

/// Convert a term title to a kebab-case URI slug
///
/// A trailing parenthetical is dropped, `/` becomes `-`, `&` becomes `and`,
/// and anything outside `[a-z0-9]` after lowercasing is removed.
///
/// # Examples
///
/// ```
/// use termbase_extractor::slugify;
///
/// assert_eq!(slugify("SQL (Structured Query Language)"), "sql");
/// assert_eq!(slugify("Profit & Loss"), "profit-and-loss");
/// assert_eq!(slugify("B2B/B2C Sales"), "b2b-b2c-sales");
/// ```
pub fn slugify(title: &str) -> String {
    let name = TRAILING_PARENS.replace(title, "");
    let lowered = name.to_lowercase();
    let lowered = lowered.trim().replace('/', "-").replace('&', "and");
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let dashed = WHITESPACE.replace_all(&cleaned, "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Revenue"), "revenue");
        assert_eq!(slugify("  Customer Lifetime Value  "), "customer-lifetime-value");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("What's a \"KPI\"?"), "whats-a-kpi");
        assert_eq!(slugify("Go-to-Market -- Strategy"), "go-to-market-strategy");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        assert_eq!(slugify("Café Sales"), "caf-sales");
    }

    #[test]
    fn test_only_trailing_parenthetical_dropped() {
        assert_eq!(slugify("Cost (of goods) sold"), "cost-of-goods-sold");
        assert_eq!(slugify("Term ()"), "term");
    }

    #[test]
    fn test_symbols_only_gives_empty_slug() {
        assert_eq!(slugify("???"), "");
        assert_eq!(slugify("(ABC)"), "");
    }

    #[test]
    fn test_expansion_slug() {
        assert_eq!(slugify("Structured Query Language"), "structured-query-language");
    }
}
