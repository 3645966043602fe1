//! Deduplication and homograph disambiguation
//!
//! Terms sharing a slug are split by identity key. A key is the slug of a
//! member's parenthetical expansion, but only when that expansion looks like a
//! spelled-out name: it contains whitespace and is longer than the member's
//! preferred label. Members without such an expansion share the empty key.
//!
//! One key in a slug group means the members are the same concept and are
//! merged. Several keys mean homographs: the canonical sub-group keeps the
//! slug and every other sub-group is merged on its own and re-slugged to its
//! key.

use crate::category::CategoryMapper;
use std::collections::{BTreeMap, BTreeSet};
use termbase_domain::{LabelSet, ResolvedTerm, Term};
use termbase_extractor::slugify;
use tracing::info;

/// Identity key of a term, empty when its expansion is not a full name
pub fn identity_key(term: &Term) -> String {
    match &term.parens_expansion {
        Some(expansion)
            if expansion.contains(char::is_whitespace)
                && expansion.chars().count() > term.pref_label.chars().count() =>
        {
            slugify(expansion)
        }
        _ => String::new(),
    }
}

/// A decision taken while resolving a slug group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupEvent {
    /// Several terms were collapsed into one
    Merged {
        /// Resulting slug
        slug: String,
        /// Number of terms merged
        count: usize,
        /// Sources of the merged terms
        sources: Vec<String>,
    },
    /// A homograph sub-group was given a new slug
    Disambiguated {
        /// Slug shared before resolution
        original_slug: String,
        /// Slug assigned to the sub-group
        new_slug: String,
        /// Sources of the re-slugged terms
        sources: Vec<String>,
    },
}

/// Result of deduplicating a full term set
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Surviving terms in sorted slug-group order
    pub terms: Vec<ResolvedTerm>,

    /// Merge and disambiguation decisions in processing order
    pub events: Vec<DedupEvent>,

    /// Every category that had no map entry
    pub unmapped: BTreeSet<String>,
}

/// Merges duplicates and separates homographs
pub struct Deduplicator<'a> {
    mapper: CategoryMapper<'a>,
}

impl<'a> Deduplicator<'a> {
    /// Create a deduplicator that maps categories with `mapper`
    pub fn new(mapper: CategoryMapper<'a>) -> Self {
        Self { mapper }
    }

    /// Resolve all terms, processing slug groups in sorted slug order
    pub fn resolve(&self, terms: Vec<Term>) -> DedupOutcome {
        let mut groups: BTreeMap<String, Vec<Term>> = BTreeMap::new();
        for term in terms {
            groups.entry(term.slug.clone()).or_default().push(term);
        }

        let mut outcome = DedupOutcome::default();
        for (slug, members) in groups {
            if members.len() == 1 {
                self.push_merged(members, &mut outcome);
                continue;
            }

            let mut subgroups = split_by_identity(members);
            if subgroups.len() == 1 {
                let (_, members) = subgroups.remove(0);
                self.push_merged(members, &mut outcome);
                continue;
            }

            let canonical = subgroups.remove(canonical_index(&subgroups));
            self.push_merged(canonical.1, &mut outcome);

            subgroups.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, members) in subgroups {
                let mut resolved = self.merge_into(members, &mut outcome.unmapped);
                info!(
                    "Disambiguated homograph '{}' -> '{}' ({})",
                    slug,
                    key,
                    resolved.all_sources.join(", ")
                );
                outcome.events.push(DedupEvent::Disambiguated {
                    original_slug: slug.clone(),
                    new_slug: key.clone(),
                    sources: resolved.all_sources.clone(),
                });
                resolved.term.slug = key;
                outcome.terms.push(resolved);
            }
        }
        outcome
    }

    /// Resolve every term on its own, keeping input order
    pub fn resolve_each(&self, terms: Vec<Term>) -> DedupOutcome {
        let mut outcome = DedupOutcome::default();
        for term in terms {
            let resolved = self.merge_into(vec![term], &mut outcome.unmapped);
            outcome.terms.push(resolved);
        }
        outcome
    }

    /// Merge terms believed to denote one concept
    ///
    /// A single term is returned unchanged. Returns `None` for no terms.
    pub fn merge(&self, members: Vec<Term>) -> Option<ResolvedTerm> {
        if members.is_empty() {
            return None;
        }
        let mut unmapped = BTreeSet::new();
        Some(self.merge_into(members, &mut unmapped))
    }

    fn push_merged(&self, members: Vec<Term>, outcome: &mut DedupOutcome) {
        let count = members.len();
        let resolved = self.merge_into(members, &mut outcome.unmapped);
        if count > 1 {
            info!(
                "Merged {} duplicates of '{}' ({})",
                count,
                resolved.term.slug,
                resolved.all_sources.join(", ")
            );
            outcome.events.push(DedupEvent::Merged {
                slug: resolved.term.slug.clone(),
                count,
                sources: resolved.all_sources.clone(),
            });
        }
        outcome.terms.push(resolved);
    }

    fn merge_into(&self, mut members: Vec<Term>, unmapped: &mut BTreeSet<String>) -> ResolvedTerm {
        let mut broader_slug = None;
        for member in &members {
            let mapping = self.mapper.map(member);
            unmapped.extend(mapping.unmapped);
            if broader_slug.is_none() {
                broader_slug = mapping.broader_slug;
            }
        }

        if members.len() == 1 {
            return ResolvedTerm::single(members.remove(0), broader_slug);
        }

        let winner = longest_definition(&members);

        let mut labels = LabelSet::excluding(&members[winner].pref_label);
        for label in members.iter().flat_map(|m| &m.alt_labels) {
            labels.insert(label);
        }

        let mut all_sources: Vec<String> = Vec::new();
        for member in &members {
            if !all_sources.contains(&member.source) {
                all_sources.push(member.source.clone());
            }
        }

        let mut term = members.swap_remove(winner);
        term.alt_labels = labels.into_vec();

        ResolvedTerm {
            term,
            all_sources,
            broader_slug,
        }
    }
}

/// Split members by identity key, keys in order of first appearance
fn split_by_identity(members: Vec<Term>) -> Vec<(String, Vec<Term>)> {
    let mut subgroups: Vec<(String, Vec<Term>)> = Vec::new();
    for term in members {
        let key = identity_key(&term);
        match subgroups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(term),
            None => subgroups.push((key, vec![term])),
        }
    }
    subgroups
}

/// The empty-key sub-group if present, else the largest; equal sizes go to
/// the smallest key so the choice does not depend on input order.
fn canonical_index(subgroups: &[(String, Vec<Term>)]) -> usize {
    if let Some(idx) = subgroups.iter().position(|(key, _)| key.is_empty()) {
        return idx;
    }
    subgroups
        .iter()
        .enumerate()
        .max_by(|(_, (ka, a)), (_, (kb, b))| a.len().cmp(&b.len()).then_with(|| kb.cmp(ka)))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Index of the longest definition; the first one wins ties
fn longest_definition(members: &[Term]) -> usize {
    let mut best = 0;
    let mut best_len = 0;
    for (idx, member) in members.iter().enumerate() {
        let len = member.definition_len();
        if len > best_len {
            best = idx;
            best_len = len;
        }
    }
    best
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::ResolverConfig;
    use proptest::prelude::*;
    use termbase_domain::CategoryMap;

    fn arb_term() -> impl Strategy<Value = Term> {
        (
            "[a-cA-C]{1,2}",
            proptest::collection::vec("[a-cA-C]{1,2}", 0..4),
            "[a-z ]{0,12}",
            "[a-c]\\.md",
        )
            .prop_map(|(label, alts, definition, source)| {
                Term::new("t", label, source)
                    .with_alt_labels(alts)
                    .with_definition(definition)
            })
    }

    proptest! {
        /// Property: merged alt labels are the case-insensitive union of the
        /// inputs minus the preferred label, in first-seen order
        #[test]
        fn test_merge_union(members in proptest::collection::vec(arb_term(), 2..6)) {
            let (map, config) = (CategoryMap::default(), ResolverConfig::default());
            let dedup = Deduplicator::new(CategoryMapper::new(&map, &config));
            let merged = dedup.merge(members.clone()).unwrap();

            let pref = merged.term.pref_label.to_lowercase();
            let mut expected: Vec<String> = Vec::new();
            for label in members.iter().flat_map(|m| &m.alt_labels) {
                let lowered = label.to_lowercase();
                if lowered != pref && !expected.iter().any(|e| e.to_lowercase() == lowered) {
                    expected.push(label.clone());
                }
            }
            prop_assert_eq!(merged.term.alt_labels, expected);
        }

        /// Property: merging one term is the identity
        #[test]
        fn test_merge_single_is_identity(term in arb_term()) {
            let (map, config) = (CategoryMap::default(), ResolverConfig::default());
            let dedup = Deduplicator::new(CategoryMapper::new(&map, &config));
            let merged = dedup.merge(vec![term.clone()]).unwrap();
            prop_assert_eq!(merged.term, term);
        }

        /// Property: resolving the same input twice gives the same output
        #[test]
        fn test_resolve_deterministic(members in proptest::collection::vec(arb_term(), 0..8)) {
            let (map, config) = (CategoryMap::default(), ResolverConfig::default());
            let dedup = Deduplicator::new(CategoryMapper::new(&map, &config));
            let first = dedup.resolve(members.clone());
            let second = dedup.resolve(members);
            prop_assert_eq!(first.terms, second.terms);
            prop_assert_eq!(first.events, second.events);
        }
    }
}
