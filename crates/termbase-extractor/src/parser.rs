//! Line-cursor state machine shared by every document variant
//!
//! One machine handles all four layouts; a [`VariantDescriptor`] supplies the
//! differences (which heading levels carry terms, how fields are marked, where
//! the definition comes from and which fields are read). Each step is a pure
//! function from a [`Cursor`] to an advanced cursor plus whatever it read.

use crate::config::ExtractorConfig;
use crate::cursor::Cursor;
use crate::line::{bare_field, bold_field, heading, is_blank, is_separator};
use termbase_domain::Variant;
use tracing::debug;

/// How field lines are marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// `**Key**: value`
    Bold,
    /// `Key: value`
    Bare,
}

/// Where an entry's definition comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSource {
    /// Paragraph lines between the heading and the first field
    Paragraph,
    /// A `Definition` field
    Field,
}

/// Fields the parser can pick up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Definition text
    Definition,
    /// Comma-separated categories
    Categories,
    /// Comma-separated abbreviations
    Abbreviations,
    /// Comma-separated spelling variations
    Variations,
    /// Comma-separated synonyms
    Synonyms,
}

impl FieldKind {
    /// Key as written in documents
    pub fn key(&self) -> &'static str {
        match self {
            FieldKind::Definition => "Definition",
            FieldKind::Categories => "Categories",
            FieldKind::Abbreviations => "Abbreviations",
            FieldKind::Variations => "Variations",
            FieldKind::Synonyms => "Synonyms",
        }
    }
}

/// Keys that end a definition paragraph in bare-field documents
const BARE_MARKER_KEYS: [&str; 5] = ["Categories", "Abbreviations", "Variations", "Synonyms", "Tags"];

const LABEL_FIELDS: [FieldKind; 4] = [
    FieldKind::Categories,
    FieldKind::Abbreviations,
    FieldKind::Variations,
    FieldKind::Synonyms,
];

/// Per-variant parameters of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Heading levels whose headings are terms
    pub term_levels: &'static [usize],
    /// Field marker convention
    pub style: FieldStyle,
    /// Definition source
    pub definition: DefinitionSource,
    /// Fields that are read; others are skipped
    pub fields: &'static [FieldKind],
}

const STANDARD: VariantDescriptor = VariantDescriptor {
    term_levels: &[2],
    style: FieldStyle::Bold,
    definition: DefinitionSource::Paragraph,
    fields: &LABEL_FIELDS,
};

const UNBOLDED: VariantDescriptor = VariantDescriptor {
    term_levels: &[2, 3],
    style: FieldStyle::Bare,
    definition: DefinitionSource::Paragraph,
    fields: &LABEL_FIELDS,
};

const SECTION_GROUPED: VariantDescriptor = VariantDescriptor {
    term_levels: &[3],
    style: FieldStyle::Bold,
    definition: DefinitionSource::Paragraph,
    fields: &LABEL_FIELDS,
};

const PROCESS_MGMT: VariantDescriptor = VariantDescriptor {
    term_levels: &[3],
    style: FieldStyle::Bold,
    definition: DefinitionSource::Field,
    fields: &[FieldKind::Definition],
};

impl VariantDescriptor {
    /// Descriptor for a detected variant
    pub fn for_variant(variant: Variant) -> &'static VariantDescriptor {
        match variant {
            Variant::Standard => &STANDARD,
            Variant::Unbolded => &UNBOLDED,
            Variant::SectionGrouped => &SECTION_GROUPED,
            Variant::ProcessMgmt => &PROCESS_MGMT,
        }
    }

    fn is_term_level(&self, level: usize) -> bool {
        self.term_levels.contains(&level)
    }

    /// Headings at or above the deepest term level end an entry
    fn is_boundary(&self, line: &str) -> bool {
        let deepest = self.term_levels.iter().copied().max().unwrap_or(0);
        heading(line).is_some_and(|h| h.level <= deepest)
    }

    fn is_field_marker(&self, line: &str) -> bool {
        match self.style {
            FieldStyle::Bold => line.trim().starts_with("**"),
            FieldStyle::Bare => bare_field(line, &BARE_MARKER_KEYS).is_some(),
        }
    }

    fn field<'l>(&self, line: &'l str) -> Option<(FieldKind, &'l str)> {
        let (key, value) = match self.style {
            FieldStyle::Bold => bold_field(line)?,
            FieldStyle::Bare => bare_field(line, &BARE_MARKER_KEYS)?,
        };
        self.fields
            .iter()
            .find(|f| f.key() == key)
            .map(|f| (*f, value))
    }
}

/// One glossary entry as found in a document, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    /// Heading text
    pub title_raw: String,
    /// Definition text, lines joined with single spaces
    pub definition: String,
    /// `Categories` field value
    pub categories: String,
    /// `Abbreviations` field value
    pub abbreviations: String,
    /// `Variations` field value
    pub variations: String,
    /// `Synonyms` field value
    pub synonyms: String,
}

impl RawEntry {
    fn set(&mut self, kind: FieldKind, value: &str) {
        let slot = match kind {
            FieldKind::Definition => &mut self.definition,
            FieldKind::Categories => &mut self.categories,
            FieldKind::Abbreviations => &mut self.abbreviations,
            FieldKind::Variations => &mut self.variations,
            FieldKind::Synonyms => &mut self.synonyms,
        };
        *slot = value.to_string();
    }
}

/// Lazy sequence of raw entries from one document
///
/// Finite and not restartable: once exhausted it stays exhausted.
pub struct EntryIter<'a> {
    cursor: Cursor<'a>,
    descriptor: &'static VariantDescriptor,
    config: &'a ExtractorConfig,
}

impl<'a> EntryIter<'a> {
    /// Parse `lines` from `start` (usually the frontmatter end) as `variant`
    pub fn new(
        lines: &'a [&'a str],
        start: usize,
        variant: Variant,
        config: &'a ExtractorConfig,
    ) -> Self {
        Self {
            cursor: Cursor::new(lines, start),
            descriptor: VariantDescriptor::for_variant(variant),
            config,
        }
    }
}

impl<'a> Iterator for EntryIter<'a> {
    type Item = RawEntry;

    fn next(&mut self) -> Option<RawEntry> {
        let Some((cursor, title)) = seek_heading(self.cursor, self.descriptor, self.config) else {
            self.cursor = self.cursor.finish();
            return None;
        };

        let mut entry = RawEntry {
            title_raw: title.to_string(),
            ..RawEntry::default()
        };

        let cursor = match self.descriptor.definition {
            DefinitionSource::Paragraph => {
                let (cursor, definition) = collect_definition(cursor, self.descriptor);
                entry.definition = definition;
                cursor
            }
            DefinitionSource::Field => cursor,
        };
        let cursor = collect_fields(cursor, self.descriptor, &mut entry);
        self.cursor = consume_separator(cursor);

        Some(entry)
    }
}

/// Find the next term heading; returns the cursor after it and its text
fn seek_heading<'a>(
    cursor: Cursor<'a>,
    descriptor: &VariantDescriptor,
    config: &ExtractorConfig,
) -> Option<(Cursor<'a>, &'a str)> {
    let mut cursor = cursor;
    while let Some(line) = cursor.peek() {
        cursor = cursor.advance();
        let Some(h) = heading(line) else { continue };
        if !descriptor.is_term_level(h.level) {
            continue;
        }
        if config.is_blocklisted(h.text) {
            debug!("Skipping structural heading '{}'", h.text);
            continue;
        }
        return Some((cursor, h.text));
    }
    None
}

fn collect_definition<'a>(
    cursor: Cursor<'a>,
    descriptor: &VariantDescriptor,
) -> (Cursor<'a>, String) {
    let mut cursor = cursor;
    let mut parts: Vec<&str> = Vec::new();
    while let Some(line) = cursor.peek() {
        if is_separator(line) || descriptor.is_boundary(line) || descriptor.is_field_marker(line) {
            break;
        }
        if !is_blank(line) {
            parts.push(line.trim());
        }
        cursor = cursor.advance();
    }
    (cursor, parts.join(" "))
}

fn collect_fields<'a>(
    cursor: Cursor<'a>,
    descriptor: &VariantDescriptor,
    entry: &mut RawEntry,
) -> Cursor<'a> {
    let mut cursor = cursor;
    while let Some(line) = cursor.peek() {
        if is_separator(line) || descriptor.is_boundary(line) {
            break;
        }
        if let Some((kind, value)) = descriptor.field(line) {
            entry.set(kind, value);
        }
        cursor = cursor.advance();
    }
    cursor
}

fn consume_separator(cursor: Cursor<'_>) -> Cursor<'_> {
    if cursor.peek().is_some_and(is_separator) {
        cursor.advance()
    } else {
        cursor
    }
}
