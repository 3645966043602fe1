//! Output row schema

/// One flat output record
///
/// Field order matches [`Row::COLUMNS`]. `hidden_labels`, `related_slugs` and
/// `example` are left empty by the importer and filled during curation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Concept identifier
    pub uri_slug: String,
    /// Preferred label
    pub pref_label: String,
    /// Pipe-separated alternate labels
    pub alt_labels: String,
    /// Pipe-separated hidden labels
    pub hidden_labels: String,
    /// Definition text
    pub definition: String,
    /// Broader concept slug
    pub broader_slug: String,
    /// Pipe-separated related concept slugs
    pub related_slugs: String,
    /// Provenance note
    pub scope_note: String,
    /// Usage example
    pub example: String,
}

impl Row {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 9] = [
        "uri_slug",
        "pref_label",
        "alt_labels",
        "hidden_labels",
        "definition",
        "broader_slug",
        "related_slugs",
        "scope_note",
        "example",
    ];

    /// Separator for multi-valued columns
    pub const LIST_SEPARATOR: &'static str = "|";

    /// Field values in column order
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.uri_slug,
            &self.pref_label,
            &self.alt_labels,
            &self.hidden_labels,
            &self.definition,
            &self.broader_slug,
            &self.related_slugs,
            &self.scope_note,
            &self.example,
        ]
    }
}
