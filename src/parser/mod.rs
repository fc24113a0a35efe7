//! Record document parser.
//!
//! Pure functions turning a JSON array document or JSONL text into records.
//! A JSON array document must parse as a whole; in JSONL every line stands on
//! its own and malformed lines are reported and skipped.

use crate::model::ParseError;
use serde_json::Value;
use tracing::warn;

/// Records parsed from a document, plus the lines that were skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedRecords {
    /// Successfully parsed records, in document order.
    pub records: Vec<Value>,
    /// One error per skipped JSONL line.
    pub skipped: Vec<ParseError>,
}

/// Document shape, decided by the first non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// A single JSON array of records.
    JsonArray,
    /// One JSON record per line.
    JsonLines,
}

/// Detect the document format of `content`.
pub fn detect_format(content: &str) -> DocumentFormat {
    if content.trim_start().starts_with('[') {
        DocumentFormat::JsonArray
    } else {
        DocumentFormat::JsonLines
    }
}

/// Parse `content` as either a JSON array or JSONL.
///
/// # Errors
///
/// Only a malformed JSON array document fails as a whole. JSONL lines that
/// do not parse end up in [`ParsedRecords::skipped`].
pub fn parse_records(content: &str) -> Result<ParsedRecords, ParseError> {
    match detect_format(content) {
        DocumentFormat::JsonArray => parse_json_array(content),
        DocumentFormat::JsonLines => Ok(parse_json_lines(content)),
    }
}

/// Parse a document holding one JSON array.
///
/// # Errors
///
/// [`ParseError::InvalidJson`] if the document is not valid JSON,
/// [`ParseError::NotAnArray`] if it is valid but not an array.
pub fn parse_json_array(content: &str) -> Result<ParsedRecords, ParseError> {
    let document: Value = serde_json::from_str(content).map_err(|e| ParseError::InvalidJson {
        line: e.line(),
        message: e.to_string(),
    })?;

    match document {
        Value::Array(records) => Ok(ParsedRecords {
            records,
            skipped: Vec::new(),
        }),
        other => Err(ParseError::NotAnArray {
            found: value_kind(&other),
        }),
    }
}

/// Parse JSONL, skipping blank and malformed lines.
pub fn parse_json_lines(content: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                let error = ParseError::InvalidJson {
                    line: index + 1,
                    message: e.to_string(),
                };
                warn!(%error, "skipping malformed line");
                parsed.skipped.push(error);
            }
        }
    }

    parsed
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
