//! Category mapping

use crate::config::ResolverConfig;
use crate::error::ResolverError;
use std::io::Read;
use std::path::Path;
use termbase_domain::{CategoryMap, Term};
use tracing::info;

/// Load a category map from a two-column CSV file with a header row
///
/// Columns are matched by position: raw category, then broader slug.
pub fn load_category_map(path: impl AsRef<Path>) -> Result<CategoryMap, ResolverError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| ResolverError::CategoryMap {
            path: path.to_path_buf(),
            source,
        })?;
    let map = collect_pairs(reader).map_err(|source| ResolverError::CategoryMap {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} category mappings from {}", map.len(), path.display());
    Ok(map)
}

/// Read a category map from any CSV source with a header row
pub fn read_category_map<R: Read>(reader: R) -> Result<CategoryMap, ResolverError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    Ok(collect_pairs(reader)?)
}

fn collect_pairs<R: Read>(mut reader: csv::Reader<R>) -> Result<CategoryMap, csv::Error> {
    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let category = record.get(0).unwrap_or_default().to_string();
        let slug = record.get(1).unwrap_or_default().to_string();
        pairs.push((category, slug));
    }
    Ok(CategoryMap::from_pairs(pairs))
}

/// Outcome of mapping one term's categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    /// Broader slug from the first mapped category, if any
    pub broader_slug: Option<String>,

    /// Categories with no map entry, in source order
    pub unmapped: Vec<String>,
}

/// Maps raw category text through a [`CategoryMap`]
#[derive(Debug, Clone, Copy)]
pub struct CategoryMapper<'a> {
    map: &'a CategoryMap,
    config: &'a ResolverConfig,
}

impl<'a> CategoryMapper<'a> {
    /// Create a mapper over a loaded map
    pub fn new(map: &'a CategoryMap, config: &'a ResolverConfig) -> Self {
        Self { map, config }
    }

    /// Map a term's raw categories
    ///
    /// The first category with an entry wins; every category without one is
    /// reported. Uncategorized terms fall back to the configured default
    /// only when their source name contains the configured marker.
    pub fn map(&self, term: &Term) -> Mapping {
        let raw = term.categories_raw.trim();
        if raw.is_empty() {
            return Mapping {
                broader_slug: self.fallback(&term.source),
                unmapped: Vec::new(),
            };
        }

        let mut mapping = Mapping::default();
        for category in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            match self.map.get(category) {
                Some(slug) => {
                    if mapping.broader_slug.is_none() {
                        mapping.broader_slug = Some(slug.to_string());
                    }
                }
                None => mapping.unmapped.push(category.to_string()),
            }
        }
        mapping
    }

    fn fallback(&self, source: &str) -> Option<String> {
        let marker = &self.config.fallback_source_marker;
        if !marker.is_empty() && source.contains(marker.as_str()) {
            Some(self.config.default_broader_slug.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> CategoryMap {
        CategoryMap::from_pairs([("Finance", "finance"), ("Sales", "sales")])
    }

    #[test]
    fn test_first_mapped_category_wins() {
        let (map, config) = (map(), ResolverConfig::default());
        let term = Term::new("a", "A", "a.md").with_categories("Unknown, Sales, Finance");
        let mapping = CategoryMapper::new(&map, &config).map(&term);
        assert_eq!(mapping.broader_slug.as_deref(), Some("sales"));
        assert_eq!(mapping.unmapped, vec!["Unknown"]);
    }

    #[test]
    fn test_all_unmapped_collected() {
        let (map, config) = (map(), ResolverConfig::default());
        let term = Term::new("a", "A", "a.md").with_categories("X, , Y");
        let mapping = CategoryMapper::new(&map, &config).map(&term);
        assert!(mapping.broader_slug.is_none());
        assert_eq!(mapping.unmapped, vec!["X", "Y"]);
    }

    #[test]
    fn test_empty_categories_fallback_by_source() {
        let (map, config) = (map(), ResolverConfig::default());
        let mapper = CategoryMapper::new(&map, &config);

        let process = Term::new("sop", "SOP", "process-management-glossary.md");
        assert_eq!(mapper.map(&process).broader_slug.as_deref(), Some("operations"));

        let other = Term::new("sop", "SOP", "ops.md");
        assert_eq!(mapper.map(&other), Mapping::default());
    }

    #[test]
    fn test_fallback_only_applies_to_empty_categories() {
        let (map, config) = (map(), ResolverConfig::default());
        let term = Term::new("a", "A", "process-management.md").with_categories("Unknown");
        let mapping = CategoryMapper::new(&map, &config).map(&term);
        assert!(mapping.broader_slug.is_none());
    }

    #[test]
    fn test_read_category_map_by_position() {
        let csv = "source_category,egms_slug\nFinance, finance\nSales,sales\n,ignored\nOrphan\n";
        let map = read_category_map(csv.as_bytes()).unwrap();
        assert_eq!(map.get("Finance"), Some("finance"));
        assert_eq!(map.get("Sales"), Some("sales"));
        assert_eq!(map.get("Orphan"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_missing_category_map_is_an_error() {
        let err = load_category_map("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ResolverError::CategoryMap { .. }));
        assert!(err.to_string().contains("here.csv"));
    }
}
