//! Normalize raw entries into terms

use crate::config::ExtractorConfig;
use crate::parser::RawEntry;
use crate::slug::slugify;
use crate::title::split_title;
use termbase_domain::Term;
use tracing::debug;

/// Builds [`Term`]s from [`RawEntry`]s
pub struct TermBuilder<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> TermBuilder<'a> {
    /// Create a builder using the config's sentinel values
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    /// Build a term, or `None` when the title yields an empty slug
    ///
    /// A title of the form `Name (Expansion)` gives `Name` as preferred label
    /// and `Expansion` as the first alternate label. Abbreviations, variations
    /// and synonyms follow in that order; duplicates across fields are kept.
    pub fn build(&self, entry: RawEntry, source: &str) -> Option<Term> {
        let slug = slugify(&entry.title_raw);
        if slug.is_empty() {
            debug!("Dropping entry '{}' from {}: empty slug", entry.title_raw, source);
            return None;
        }

        let (pref_label, expansion) = split_title(&entry.title_raw);

        let mut alt_labels = Vec::new();
        if let Some(expansion) = &expansion {
            if *expansion != pref_label {
                alt_labels.push(expansion.clone());
            }
        }
        for field in [&entry.abbreviations, &entry.variations, &entry.synonyms] {
            alt_labels.extend(self.split_values(field, &pref_label));
        }

        Some(Term {
            slug,
            pref_label,
            alt_labels,
            definition: entry.definition,
            categories_raw: entry.categories.trim().to_string(),
            source: source.to_string(),
            parens_expansion: expansion,
        })
    }

    fn split_values(&self, field: &str, pref_label: &str) -> Vec<String> {
        if self.config.is_na(field) {
            return Vec::new();
        }
        field
            .split(',')
            .map(str::trim)
            .filter(|item| !self.config.is_na(item) && *item != pref_label)
            .map(str::to_string)
            .collect()
    }
}
