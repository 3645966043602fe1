//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use termbase_resolver::{FileSummary, RunReport};
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format per-file detection results.
    pub fn format_files(&self, files: &[FileSummary]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(files)?),
            OutputFormat::Table => Ok(self.files_table(files)),
        }
    }

    /// Format an import run summary.
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.report_table(report)),
        }
    }

    fn files_table(&self, files: &[FileSummary]) -> String {
        if files.is_empty() {
            return self.colorize("No files processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Source", "Format", "Terms", "Dropped"]);
        for file in files {
            let terms = if file.terms == 0 {
                self.colorize("0", "yellow")
            } else {
                file.terms.to_string()
            };
            let dropped = file.dropped.to_string();
            builder.push_record([
                file.source.as_str(),
                file.variant.as_str(),
                terms.as_str(),
                dropped.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
        table.to_string()
    }

    fn report_table(&self, report: &RunReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Files".to_string(), report.files.len().to_string()]);
        builder.push_record(["Total terms".to_string(), report.total_terms.to_string()]);
        if report.dropped_entries > 0 {
            builder.push_record([
                "Dropped entries".to_string(),
                self.colorize(&report.dropped_entries.to_string(), "yellow"),
            ]);
        }
        builder.push_record(["Collisions".to_string(), report.collisions.to_string()]);
        builder.push_record(["Merged".to_string(), report.merged.to_string()]);
        builder.push_record(["Disambiguated".to_string(), report.disambiguated.to_string()]);
        if report.residual_collisions > 0 {
            builder.push_record([
                "Residual collisions".to_string(),
                self.colorize(&report.residual_collisions.to_string(), "yellow"),
            ]);
        }
        builder.push_record([
            "Unmapped categories".to_string(),
            report.unmapped_categories.len().to_string(),
        ]);
        builder.push_record(["Output rows".to_string(), report.rows.to_string()]);

        let mut totals = builder.build();
        totals
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}\n{}",
            self.colorize("Dry-run summary", "cyan"),
            self.files_table(&report.files),
            totals
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Colorize text if colors are enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
