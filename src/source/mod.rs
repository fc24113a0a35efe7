//! Record input sources.
//!
//! Records come from a file given on the command line or from piped stdin.
//! Both are read once, in full, before the viewer starts.

use crate::model::error::InputError;
use crate::model::AppError;
use crate::parser::{parse_records, ParsedRecords};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;

/// Where the records come from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Read the whole source into a string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors.
    pub fn read_content(&self) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => Ok(std::fs::read_to_string(path)?),
            InputSource::Stdin => read_from(std::io::stdin().lock()),
        }
    }

    /// Human-readable name for titles and logs.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Read everything from `reader`.
///
/// # Errors
///
/// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
pub fn read_from(mut reader: impl Read) -> Result<String, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Detect the input source.
///
/// # Logic:
/// 1. If a file path is provided it must exist
/// 2. Otherwise stdin must be piped
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

/// Read and parse all records from `source`.
///
/// # Errors
///
/// Fails on I/O errors and on malformed JSON array documents. Malformed JSONL
/// lines are skipped and reported in the result.
pub fn load_records(source: &InputSource) -> Result<ParsedRecords, AppError> {
    let content = source.read_content()?;
    let parsed = parse_records(&content)?;
    info!(
        source = %source.display_name(),
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "records loaded"
    );
    Ok(parsed)
}
