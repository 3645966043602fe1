//! Category map - raw category text to broader concept slug

use std::collections::HashMap;

/// Immutable lookup from a raw category string to a broader concept slug
///
/// Built once per run and shared read-only by every resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: HashMap<String, String>,
}

impl CategoryMap {
    /// Build a map from `(raw category, broader slug)` pairs
    ///
    /// Keys and values are trimmed. Pairs with an empty key are ignored and a
    /// later pair overrides an earlier one with the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use termbase_domain::CategoryMap;
    ///
    /// let map = CategoryMap::from_pairs([(" Finance ", "finance")]);
    /// assert_eq!(map.get("Finance"), Some("finance"));
    /// assert_eq!(map.get("Marketing"), None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(k, v)| {
                let key = k.as_ref().trim();
                if key.is_empty() {
                    None
                } else {
                    Some((key.to_string(), v.as_ref().trim().to_string()))
                }
            })
            .collect();
        Self { entries }
    }

    /// Look up the broader slug for a raw category
    ///
    /// Entries mapping to an empty slug are treated as absent.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .get(category)
            .map(String::as_str)
            .filter(|slug| !slug.is_empty())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
