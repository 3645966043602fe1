//! Core Extractor implementation

use crate::builder::TermBuilder;
use crate::config::ExtractorConfig;
use crate::detect::detect;
use crate::error::ExtractorError;
use crate::frontmatter::content_start;
use crate::parser::EntryIter;
use termbase_domain::{Term, Variant};
use tracing::{info, warn};

/// Terms extracted from one document
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Source file name
    pub source: String,

    /// Detected layout variant
    pub variant: Variant,

    /// Terms in document order
    pub terms: Vec<Term>,

    /// Entries dropped because their title produced no slug
    pub entries_dropped: usize,
}

/// The Extractor converts glossary documents into terms
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Extract every term from a document
    ///
    /// Never fails: a document without recognizable entries yields no terms.
    pub fn extract(&self, source: &str, text: &str) -> Extraction {
        let lines: Vec<&str> = text.lines().collect();
        let variant = detect(&lines, &self.config);
        let start = content_start(&lines);

        let builder = TermBuilder::new(&self.config);
        let mut terms = Vec::new();
        let mut entries_dropped = 0;
        for entry in EntryIter::new(&lines, start, variant, &self.config) {
            match builder.build(entry, source) {
                Some(term) => terms.push(term),
                None => entries_dropped += 1,
            }
        }

        info!("{} -> {} format, {} terms", source, variant, terms.len());
        if terms.is_empty() {
            warn!("No terms found in {}", source);
        }

        Extraction {
            source: source.to_string(),
            variant,
            terms,
            entries_dropped,
        }
    }
}
