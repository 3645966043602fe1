//! Import and detect commands against files on disk

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use termbase_cli::cli::{DetectArgs, ImportArgs};
use termbase_cli::commands::detect::detect_files;
use termbase_cli::commands::import::run_import;
use termbase_cli::Config;

const FINANCE_A: &str = "\
---
title: Finance Glossary
---
# Finance Glossary

## Revenue

Total income.

**Categories**: Finance

---

## SQL (Structured Query Language)

A language for relational data.

**Categories**: Data

---
";

const FINANCE_B: &str = "\
# Sales Glossary

## Revenue

Total income earned during a period.

**Categories**: Finance, Sales Ops

---

## SQL (Sales Qualified Lead)

A lead vetted by sales.

**Categories**: Sales

---
";

const CATEGORY_MAP: &str = "source_category,egms_slug\nFinance,finance\nData,data\nSales,sales\n";

fn write(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn import_args(dir: &Path) -> Result<ImportArgs> {
    Ok(ImportArgs {
        sources: vec![
            write(dir, "finance.md", FINANCE_A)?,
            write(dir, "sales.md", FINANCE_B)?,
        ],
        category_map: write(dir, "map.csv", CATEGORY_MAP)?,
        output: None,
        collision_report: None,
        no_dedup: false,
        dry_run: false,
    })
}

#[test]
fn test_import_merges_and_disambiguates() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outcome = run_import(&import_args(dir.path())?, &Config::default())?;

    let slugs: Vec<&str> = outcome.rows.iter().map(|r| r.uri_slug.as_str()).collect();
    assert_eq!(slugs, vec!["revenue", "sql", "structured-query-language"]);

    let revenue = &outcome.rows[0];
    assert_eq!(revenue.definition, "Total income earned during a period.");
    assert_eq!(revenue.broader_slug, "finance");
    assert_eq!(revenue.scope_note, "Sources: finance.md, sales.md");

    assert_eq!(outcome.report.total_terms, 4);
    assert_eq!(outcome.report.collisions, 2);
    assert_eq!(outcome.report.merged, 1);
    assert_eq!(outcome.report.disambiguated, 1);
    assert_eq!(outcome.report.unmapped_categories, vec!["Sales Ops"]);
    Ok(())
}

#[test]
fn test_import_without_dedup_keeps_every_term() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = import_args(dir.path())?;
    args.no_dedup = true;
    let outcome = run_import(&args, &Config::default())?;

    let slugs: Vec<&str> = outcome.rows.iter().map(|r| r.uri_slug.as_str()).collect();
    assert_eq!(slugs, vec!["revenue", "sql", "revenue", "sql"]);
    assert_eq!(outcome.report.residual_collisions, 2);
    Ok(())
}

#[test]
fn test_collision_report_written() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = import_args(dir.path())?;
    let report_path = dir.path().join("collisions.csv");
    args.collision_report = Some(report_path.clone());
    run_import(&args, &Config::default())?;

    let report = fs::read_to_string(&report_path)?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "uri_slug,pref_label,source,definition_preview");
    assert_eq!(lines[1], "revenue,Revenue,finance.md,Total income.");
    assert_eq!(lines.len(), 5);
    Ok(())
}

#[test]
fn test_missing_category_map_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = import_args(dir.path())?;
    args.category_map = dir.path().join("absent.csv");
    let err = run_import(&args, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
    Ok(())
}

#[test]
fn test_detect_reports_each_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let args = DetectArgs {
        sources: vec![
            write(dir.path(), "finance.md", FINANCE_A)?,
            write(dir.path(), "notes.md", "No headings at all.\n")?,
            write(dir.path(), "odd.md", "## ???\n\nNot a term.\n\n## Revenue\n\nIncome.\n")?,
        ],
    };
    let files = detect_files(&args, &Config::default())?;
    assert_eq!(files.len(), 3);
    assert_eq!(files[0].source, "finance.md");
    assert_eq!(files[0].variant, "STANDARD");
    assert_eq!(files[0].terms, 2);
    assert_eq!(files[1].terms, 0);
    assert_eq!(files[2].terms, 1);
    assert_eq!(files[2].dropped, 1);
    Ok(())
}

fn termbase(dir: &Path, args: &[&str]) -> Result<std::process::Output> {
    let config = write(dir, "config.toml", "")?;
    Ok(Command::new(env!("CARGO_BIN_EXE_termbase"))
        .arg("--config")
        .arg(config)
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .current_dir(dir)
        .output()?)
}

#[test]
fn test_binary_writes_rows_to_stdout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &["import", "finance.md", "sales.md", "--category-map", "map.csv"],
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("uri_slug,pref_label,alt_labels,hidden_labels,definition,broader_slug,related_slugs,scope_note,example")
    );
    assert_eq!(stdout.lines().count(), 4);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("sql (2x): SQL (finance.md), SQL (sales.md)"));
    Ok(())
}

#[test]
fn test_binary_writes_rows_to_output_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &["import", "finance.md", "sales.md", "--category-map", "map.csv", "-o", "out.csv"],
    )?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(dir.path().join("out.csv"))?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("uri_slug,pref_label,alt_labels"));
    assert!(lines[1].starts_with("revenue,Revenue,"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Wrote 3 terms to out.csv"));
    Ok(())
}

#[test]
fn test_binary_uncreatable_output_names_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &["import", "finance.md", "--category-map", "map.csv", "-o", "missing/out.csv"],
    )?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error: Failed to create missing/out.csv"));
    Ok(())
}

#[test]
fn test_binary_dry_run_still_writes_collision_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &[
            "import",
            "finance.md",
            "sales.md",
            "--category-map",
            "map.csv",
            "--dry-run",
            "--collision-report",
            "collisions.csv",
        ],
    )?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let report = fs::read_to_string(dir.path().join("collisions.csv"))?;
    assert_eq!(report.lines().count(), 5);
    Ok(())
}

#[test]
fn test_collision_report_skipped_without_collisions() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = import_args(dir.path())?;
    args.sources.truncate(1);
    let report_path = dir.path().join("collisions.csv");
    args.collision_report = Some(report_path.clone());

    let outcome = run_import(&args, &Config::default())?;
    assert_eq!(outcome.report.collisions, 0);
    assert!(!report_path.exists());
    Ok(())
}

#[test]
fn test_binary_dry_run_prints_no_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &["--format", "json", "import", "finance.md", "sales.md", "--category-map", "map.csv", "--dry-run"],
    )?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("\"total_terms\": 4"));
    Ok(())
}

#[test]
fn test_binary_missing_source_exits_nonzero() -> Result<()> {
    let dir = tempfile::tempdir()?;
    import_args(dir.path())?;
    let output = termbase(
        dir.path(),
        &["import", "finance.md", "gone.md", "--category-map", "map.csv"],
    )?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error: Failed to read gone.md"));
    Ok(())
}
