//! Errors raised by the data view and the `dataview` binary.
//!
//! Library callers only meet [`DataViewError`]. The binary wraps everything
//! that can stop it in [`AppError`]:
//!
//! - [`InputError`]: the record file or stdin could not be read
//! - [`ParseError`]: the record document is not usable JSON
//! - [`DataViewError`]: the view was configured incorrectly
//! - [`ConfigError`]: the config file was rejected
//! - `std::io::Error`: the terminal failed
//!
//! # Recovery
//!
//! Windowing never fails: out-of-range pages, missing page sizes and
//! unresolvable field paths all degrade to well-defined results. The only
//! error the core raises on its own is configuration validation
//! ([`DataViewError::MissingItemTemplate`]), surfaced when the view is built.
//! Malformed JSONL lines are non-fatal: they are logged and skipped.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::field_path::FieldPathError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the `dataview` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin. Fatal.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to parse the record collection. Fatal only when the whole
    /// document is unreadable; single JSONL lines are skipped instead.
    #[error("Failed to parse records: {0}")]
    Parse(#[from] ParseError),

    /// The data view was configured incorrectly. Fatal.
    #[error("Invalid data view configuration: {0}")]
    DataView(#[from] DataViewError),

    /// The config file exists but could not be used. Fatal.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed. Fatal.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// crossterm or ratatui failed. Fatal; the terminal is restored first.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The record file named on the command line does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use dataview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided and stdin is a terminal.
    ///
    /// Recovery: display usage showing both invocation modes
    /// (`dataview records.json` and `cat records.json | dataview`).
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing record documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A JSON document or JSONL line is syntactically invalid.
    ///
    /// For JSONL input `line` is the 1-based line number; for a JSON array
    /// document it is the line reported by the parser.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// The 1-based line number where parsing failed.
        line: usize,
        /// The JSON parser error message.
        message: String,
    },

    /// A JSON document parsed but is not an array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// Kind of the top-level JSON value.
        found: &'static str,
    },
}

/// Configuration errors raised by the data view itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataViewError {
    /// No item template was supplied. Every visible record is rendered by the
    /// host's template; there is no default rendering policy.
    #[error("An item template is required to render records")]
    MissingItemTemplate,

    /// The host tried to set the page of a view that owns its page state.
    ///
    /// Only views built with a page handler (controlled mode) accept page
    /// updates from the host.
    #[error("Page state is owned by the data view; supply a page handler to control it")]
    PageOwnedInternally,

    /// A data key or sort field path could not be parsed.
    #[error("Invalid field path: {0}")]
    InvalidFieldPath(#[from] FieldPathError),
}

/// A mode name (layout, sort order, paginator position) that is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    /// What was being parsed, e.g. `"layout"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    /// Rejection of `value` as a `kind`.
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
