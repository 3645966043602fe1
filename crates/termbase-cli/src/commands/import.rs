//! Import command implementation.

use crate::cli::ImportArgs;
use crate::commands::{create_output, read_documents};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::io;
use termbase_domain::Row;
use termbase_extractor::Extractor;
use termbase_resolver::{
    detect_collisions, load_category_map, write_collision_report, write_rows, Resolver, RunReport,
};
use tracing::info;

/// Rows and counters produced by an import run.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Output rows in emission order
    pub rows: Vec<Row>,
    /// Run summary
    pub report: RunReport,
}

/// Execute the import command.
pub fn execute_import(args: ImportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let outcome = run_import(&args, config)?;

    if args.dry_run {
        eprintln!("{}", formatter.format_report(&outcome.report)?);
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            write_rows(&outcome.rows, create_output(path)?)?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} terms to {}",
                    outcome.rows.len(),
                    path.display()
                ))
            );
        }
        None => {
            write_rows(&outcome.rows, io::stdout().lock())?;
            info!("Wrote {} terms to stdout", outcome.rows.len());
        }
    }
    Ok(())
}

/// Parse every source, resolve collisions and project rows.
///
/// Writes the collision report when one is requested and collisions exist.
/// Never writes rows.
pub fn run_import(args: &ImportArgs, config: &Config) -> Result<ImportOutcome> {
    let map = load_category_map(&args.category_map)?;
    let documents = read_documents(&args.sources)?;
    let extractor = Extractor::new(config.extractor.clone())?;

    let mut report = RunReport::new();
    let mut terms = Vec::new();
    for doc in &documents {
        let extraction = extractor.extract(&doc.name, &doc.text);
        report.record_file(&extraction);
        terms.extend(extraction.terms);
    }
    info!("Total terms parsed: {}", terms.len());

    {
        let collisions = detect_collisions(&terms);
        report.record_collisions(collisions.len());
        if let Some(path) = &args.collision_report {
            if !collisions.is_empty() {
                write_collision_report(
                    &collisions,
                    create_output(path)?,
                    config.resolver.preview_length,
                )?;
                info!(
                    "Collision report: {} duplicate slugs written to {}",
                    collisions.len(),
                    path.display()
                );
            }
        }
    }

    let resolution = Resolver::new(&map, &config.resolver)
        .with_dedup(!args.no_dedup)
        .resolve(terms);
    report.record_resolution(&resolution);

    Ok(ImportOutcome {
        rows: resolution.rows(),
        report,
    })
}
