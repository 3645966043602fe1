//! Command implementations.

pub mod detect;
pub mod import;

pub use self::detect::execute_detect;
pub use self::import::execute_import;

use crate::error::{CliError, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// A source document read into memory.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name used as the term source
    pub name: String,
    /// Full text
    pub text: String,
}

/// Read every source up front so a missing file aborts before any output.
pub fn read_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
    paths
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path).map_err(|source| CliError::Source {
                path: path.clone(),
                source,
            })?;
            Ok(Document {
                name: source_name(path),
                text,
            })
        })
        .collect()
}

/// Create an output file, naming the path in the error.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| CliError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Base name of a path, falling back to the full path.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
