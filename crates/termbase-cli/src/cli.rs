//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Termbase - Turn markdown glossaries into a vocabulary row set.
#[derive(Debug, Parser)]
#[command(name = "termbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for summaries
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TERMBASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log filter implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse glossaries, resolve collisions and write rows as CSV
    Import(ImportArgs),

    /// Show the detected format and term count of each file
    Detect(DetectArgs),
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Markdown glossary files, processed in order
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,

    /// CSV mapping source categories to broader slugs
    #[arg(long)]
    pub category_map: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write slug collisions found before deduplication to this CSV file
    #[arg(long)]
    pub collision_report: Option<PathBuf>,

    /// Keep colliding terms as separate rows
    #[arg(long)]
    pub no_dedup: bool,

    /// Parse and resolve, then print a summary instead of rows
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the detect command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Markdown glossary files
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
