//! Detect command implementation.

use crate::cli::DetectArgs;
use crate::commands::read_documents;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use termbase_extractor::Extractor;
use termbase_resolver::FileSummary;

/// Execute the detect command.
pub fn execute_detect(args: DetectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let files = detect_files(&args, config)?;
    println!("{}", formatter.format_files(&files)?);
    Ok(())
}

/// Detect the format of each source and count its terms.
pub fn detect_files(args: &DetectArgs, config: &Config) -> Result<Vec<FileSummary>> {
    let documents = read_documents(&args.sources)?;
    let extractor = Extractor::new(config.extractor.clone())?;

    Ok(documents
        .iter()
        .map(|doc| FileSummary::from_extraction(&extractor.extract(&doc.name, &doc.text)))
        .collect())
}
