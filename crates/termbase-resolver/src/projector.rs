//! Row projection and CSV output

use crate::error::ResolverError;
use std::io::Write;
use termbase_domain::{ResolvedTerm, Row};

/// Provenance note naming every contributing source
pub fn scope_note(sources: &[String]) -> String {
    match sources {
        [] => String::new(),
        [one] => format!("Source: {}", one),
        many => format!("Sources: {}", many.join(", ")),
    }
}

/// Flatten a resolved term into an output row
pub fn project(resolved: &ResolvedTerm) -> Row {
    let term = &resolved.term;
    Row {
        uri_slug: term.slug.clone(),
        pref_label: term.pref_label.clone(),
        alt_labels: term.alt_labels.join(Row::LIST_SEPARATOR),
        definition: term.definition.clone(),
        broader_slug: resolved.broader_slug.clone().unwrap_or_default(),
        scope_note: scope_note(&resolved.all_sources),
        ..Row::default()
    }
}

/// Write rows as CSV with a header line
pub fn write_rows<W: Write>(rows: &[Row], writer: W) -> Result<(), ResolverError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(Row::COLUMNS)?;
    for row in rows {
        csv.write_record(row.fields())?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbase_domain::Term;

    #[test]
    fn test_scope_note_forms() {
        assert_eq!(scope_note(&["a.md".to_string()]), "Source: a.md");
        assert_eq!(
            scope_note(&["a.md".to_string(), "b.md".to_string()]),
            "Sources: a.md, b.md"
        );
        assert_eq!(scope_note(&[]), "");
    }

    #[test]
    fn test_project_fills_known_columns() {
        let term = Term::new("sql", "SQL", "data.md")
            .with_definition("A query language.")
            .with_alt_labels(["Structured Query Language", "Sequel"]);
        let row = project(&ResolvedTerm::single(term, Some("data".to_string())));

        assert_eq!(row.uri_slug, "sql");
        assert_eq!(row.alt_labels, "Structured Query Language|Sequel");
        assert_eq!(row.broader_slug, "data");
        assert_eq!(row.scope_note, "Source: data.md");
        assert!(row.hidden_labels.is_empty());
        assert!(row.related_slugs.is_empty());
        assert!(row.example.is_empty());
    }

    #[test]
    fn test_project_without_broader() {
        let row = project(&ResolvedTerm::single(Term::new("a", "A", "a.md"), None));
        assert_eq!(row.broader_slug, "");
        assert_eq!(row.alt_labels, "");
    }

    #[test]
    fn test_write_rows_quotes_commas() {
        let term = Term::new("roi", "ROI", "a.md").with_definition("Gain, over cost.");
        let rows = vec![project(&ResolvedTerm::single(term, None))];
        let mut out = Vec::new();
        write_rows(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "uri_slug,pref_label,alt_labels,hidden_labels,definition,broader_slug,related_slugs,scope_note,example"
        );
        assert_eq!(lines[1], "roi,ROI,,,\"Gain, over cost.\",,,Source: a.md,");
    }

    #[test]
    fn test_write_no_rows_still_has_header() {
        let mut out = Vec::new();
        write_rows(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
