//! Slug collision detection and reporting

use crate::error::ResolverError;
use std::collections::BTreeMap;
use std::io::Write;
use termbase_domain::{CollisionGroup, Term};
use tracing::warn;

/// Group terms by slug, keeping only slugs shared by more than one term
///
/// Groups are sorted by slug; members keep input order. Terms are not
/// modified.
pub fn detect_collisions(terms: &[Term]) -> Vec<CollisionGroup<'_>> {
    let mut by_slug: BTreeMap<&str, Vec<&Term>> = BTreeMap::new();
    for term in terms {
        by_slug.entry(term.slug.as_str()).or_default().push(term);
    }

    let groups: Vec<CollisionGroup<'_>> = by_slug
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(slug, members)| CollisionGroup { slug, members })
        .collect();

    if !groups.is_empty() {
        warn!("{} slug collisions detected", groups.len());
        for group in &groups {
            warn!("  {}", describe(group));
        }
    }

    groups
}

/// `slug (Nx): Label (source), ...` for one group
fn describe(group: &CollisionGroup<'_>) -> String {
    let members: Vec<String> = group
        .members
        .iter()
        .map(|t| format!("{} ({})", t.pref_label, t.source))
        .collect();
    format!("{} ({}x): {}", group.slug, group.members.len(), members.join(", "))
}

/// First `max_chars` characters of a definition, with `...` when cut
pub fn definition_preview(definition: &str, max_chars: usize) -> String {
    if definition.chars().count() > max_chars {
        let cut: String = definition.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        definition.to_string()
    }
}

/// Write collision groups as CSV: `uri_slug, pref_label, source, definition_preview`
pub fn write_collision_report<W: Write>(
    groups: &[CollisionGroup<'_>],
    writer: W,
    preview_length: usize,
) -> Result<(), ResolverError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["uri_slug", "pref_label", "source", "definition_preview"])?;
    for group in groups {
        for term in &group.members {
            let preview = definition_preview(&term.definition, preview_length);
            csv.write_record([
                group.slug,
                term.pref_label.as_str(),
                term.source.as_str(),
                preview.as_str(),
            ])?;
        }
    }
    csv.flush()?;
    Ok(())
}
