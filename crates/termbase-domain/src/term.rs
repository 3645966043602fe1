//! Term module - the unit of work flowing through the pipeline

use std::collections::HashSet;

/// A glossary term parsed from one source document
///
/// Terms are created by the extractor from a single heading/field bundle and
/// may later be merged with other terms sharing the same slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// URI-safe identifier derived from the title; not unique across files
    pub slug: String,

    /// Canonical display label
    pub pref_label: String,

    /// Alternate labels in insertion order
    pub alt_labels: Vec<String>,

    /// Definition text, possibly empty
    pub definition: String,

    /// Raw comma-separated category text from the source, possibly empty
    pub categories_raw: String,

    /// File name of the originating document
    pub source: String,

    /// Text of a trailing `(...)` in the title, kept as a disambiguation key
    pub parens_expansion: Option<String>,
}

impl Term {
    /// Create a term with only a slug, label and source set
    ///
    /// # Examples
    ///
    /// ```
    /// use termbase_domain::Term;
    ///
    /// let term = Term::new("revenue", "Revenue", "finance.md")
    ///     .with_definition("Total income.");
    /// assert_eq!(term.slug, "revenue");
    /// assert!(term.alt_labels.is_empty());
    /// ```
    pub fn new(
        slug: impl Into<String>,
        pref_label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            pref_label: pref_label.into(),
            alt_labels: Vec::new(),
            definition: String::new(),
            categories_raw: String::new(),
            source: source.into(),
            parens_expansion: None,
        }
    }

    /// Set the definition
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Set the raw category text
    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories_raw = categories.into();
        self
    }

    /// Append alternate labels
    pub fn with_alt_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Set the parenthetical expansion
    pub fn with_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.parens_expansion = Some(expansion.into());
        self
    }

    /// Length of the definition in characters
    pub fn definition_len(&self) -> usize {
        self.definition.chars().count()
    }
}

/// A term after collision resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTerm {
    /// The surviving (possibly merged) term
    pub term: Term,

    /// Every contributing source, in first-seen order, without duplicates
    pub all_sources: Vec<String>,

    /// Broader concept chosen through the category map
    pub broader_slug: Option<String>,
}

impl ResolvedTerm {
    /// Wrap a single unmerged term
    pub fn single(term: Term, broader_slug: Option<String>) -> Self {
        let all_sources = vec![term.source.clone()];
        Self {
            term,
            all_sources,
            broader_slug,
        }
    }
}

/// Terms sharing one slug, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGroup<'a> {
    /// The shared slug
    pub slug: &'a str,

    /// Members in the order they were parsed
    pub members: Vec<&'a Term>,
}

/// Order-preserving, case-insensitive set of labels
///
/// Used wherever labels from several places are unioned.
#[derive(Debug, Default)]
pub struct LabelSet {
    seen: HashSet<String>,
    labels: Vec<String>,
}

impl LabelSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set that will refuse `label` and its case variants
    pub fn excluding(label: &str) -> Self {
        let mut set = Self::new();
        set.seen.insert(label.to_lowercase());
        set
    }

    /// Insert a label unless a case-insensitive equal is present
    ///
    /// Returns whether the label was added.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.seen.insert(label.to_lowercase()) {
            self.labels.push(label.to_string());
            true
        } else {
            false
        }
    }

    /// Labels in insertion order
    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }
}
