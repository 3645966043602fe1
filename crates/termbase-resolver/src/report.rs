//! Run summary

use crate::resolver::Resolution;
use serde::Serialize;
use termbase_extractor::Extraction;

/// Per-file outcome of extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    /// Source file name
    pub source: String,

    /// Detected format
    pub variant: String,

    /// Terms extracted
    pub terms: usize,

    /// Entries dropped because their title produced no slug
    pub dropped: usize,
}

impl FileSummary {
    /// Summarize one extraction
    pub fn from_extraction(extraction: &Extraction) -> Self {
        Self {
            source: extraction.source.clone(),
            variant: extraction.variant.to_string(),
            terms: extraction.terms.len(),
            dropped: extraction.entries_dropped,
        }
    }
}

/// Counters collected over one import run
///
/// Rendered as the dry-run summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// One entry per processed file, in processing order
    pub files: Vec<FileSummary>,

    /// Terms extracted across all files
    pub total_terms: usize,

    /// Entries dropped across all files
    pub dropped_entries: usize,

    /// Slugs shared by more than one extracted term
    pub collisions: usize,

    /// Merges performed
    pub merged: usize,

    /// Homograph sub-groups given new slugs
    pub disambiguated: usize,

    /// Slugs still shared after resolution
    pub residual_collisions: usize,

    /// Categories without a map entry, sorted
    pub unmapped_categories: Vec<String>,

    /// Output rows
    pub rows: usize,
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed file
    pub fn record_file(&mut self, extraction: &Extraction) {
        let summary = FileSummary::from_extraction(extraction);
        self.total_terms += summary.terms;
        self.dropped_entries += summary.dropped;
        self.files.push(summary);
    }

    /// Record the number of pre-resolution collision groups
    pub fn record_collisions(&mut self, groups: usize) {
        self.collisions = groups;
    }

    /// Record the outcome of resolution
    pub fn record_resolution(&mut self, resolution: &Resolution) {
        self.merged = resolution.merged();
        self.disambiguated = resolution.disambiguated();
        self.residual_collisions = resolution.residual.len();
        self.unmapped_categories = resolution.unmapped.iter().cloned().collect();
        self.rows = resolution.terms.len();
    }
}
