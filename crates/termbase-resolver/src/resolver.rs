//! Resolver facade tying deduplication, mapping and projection together

use crate::category::CategoryMapper;
use crate::config::ResolverConfig;
use crate::dedup::{DedupEvent, DedupOutcome, Deduplicator};
use crate::projector::project;
use std::collections::{BTreeMap, BTreeSet};
use termbase_domain::{CategoryMap, ResolvedTerm, Row, Term};
use tracing::{info, warn};

/// Everything produced by one resolution pass
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Output terms in emission order
    pub terms: Vec<ResolvedTerm>,

    /// Merge and disambiguation decisions
    pub events: Vec<DedupEvent>,

    /// Categories without a map entry, sorted
    pub unmapped: BTreeSet<String>,

    /// Slugs still shared after resolution, with their counts
    pub residual: Vec<(String, usize)>,
}

impl Resolution {
    /// Project every term into an output row
    pub fn rows(&self) -> Vec<Row> {
        self.terms.iter().map(project).collect()
    }

    /// Number of merges performed
    pub fn merged(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DedupEvent::Merged { .. }))
            .count()
    }

    /// Number of homograph sub-groups re-slugged
    pub fn disambiguated(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DedupEvent::Disambiguated { .. }))
            .count()
    }
}

/// Resolves terms from all sources of a run into final terms
///
/// # Examples
///
/// ```
/// use termbase_domain::{CategoryMap, Term};
/// use termbase_resolver::{Resolver, ResolverConfig};
///
/// let map = CategoryMap::from_pairs([("Finance", "finance")]);
/// let config = ResolverConfig::default();
/// let resolution = Resolver::new(&map, &config).resolve(vec![
///     Term::new("revenue", "Revenue", "a.md").with_categories("Finance"),
///     Term::new("revenue", "Revenue", "b.md").with_definition("Total income."),
/// ]);
///
/// let rows = resolution.rows();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].broader_slug, "finance");
/// ```
pub struct Resolver<'a> {
    map: &'a CategoryMap,
    config: &'a ResolverConfig,
    dedup: bool,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with deduplication enabled
    pub fn new(map: &'a CategoryMap, config: &'a ResolverConfig) -> Self {
        Self {
            map,
            config,
            dedup: true,
        }
    }

    /// Enable or disable deduplication
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Resolve a full term set
    ///
    /// Residual collisions and unmapped categories are logged as warnings;
    /// neither is an error.
    pub fn resolve(&self, terms: Vec<Term>) -> Resolution {
        let input = terms.len();
        let deduplicator = Deduplicator::new(CategoryMapper::new(self.map, self.config));
        let DedupOutcome {
            terms,
            events,
            unmapped,
        } = if self.dedup {
            deduplicator.resolve(terms)
        } else {
            deduplicator.resolve_each(terms)
        };

        info!("Resolved {} terms into {}", input, terms.len());

        let residual = residual_collisions(&terms);
        if !residual.is_empty() {
            warn!("{} slugs still collide after resolution", residual.len());
            for (slug, count) in &residual {
                warn!("  {} ({}x)", slug, count);
            }
        }

        if !unmapped.is_empty() {
            let names: Vec<&str> = unmapped.iter().map(String::as_str).collect();
            warn!("{} unmapped categories: {}", names.len(), names.join(", "));
        }

        Resolution {
            terms,
            events,
            unmapped,
            residual,
        }
    }
}

fn residual_collisions(terms: &[ResolvedTerm]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for resolved in terms {
        *counts.entry(resolved.term.slug.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(slug, count)| (slug.to_string(), count))
        .collect()
}
