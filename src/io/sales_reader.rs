//! Sales log reader
//!
//! Reads the raw sales log into memory, detects its text encoding and returns
//! the non-blank lines with any header row removed.
//!
//! # Encoding Detection
//!
//! The candidate encodings are tried in order until one decodes the whole file
//! without error:
//!
//! 1. UTF-8 (a leading byte order mark is dropped)
//! 2. Windows-1252
//!
//! ```no_run
//! use sales_analytics::io::sales_reader::read_sales_lines;
//! use std::path::Path;
//!
//! let lines = read_sales_lines(Path::new("data/sales_data.txt")).unwrap();
//! println!("Read {} lines", lines.len());
//! ```

use crate::types::SalesError;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Header rows start with this token (compared case-insensitively)
const HEADER_PREFIX: &str = "transactionid";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn candidate_encodings() -> [&'static Encoding; 2] {
    [UTF_8, WINDOWS_1252]
}

/// Read the sales log at `path`
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Trimmed, non-blank lines without the header row
/// * `Err(SalesError::FileNotFound)` - The file does not exist
/// * `Err(SalesError::Decode)` - No candidate encoding could decode the bytes
/// * `Err(SalesError::IoError)` - Any other read failure
pub fn read_sales_lines(path: &Path) -> Result<Vec<String>, SalesError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SalesError::file_not_found(&path.display().to_string()),
        _ => SalesError::from(e),
    })?;

    let text = decode_bytes(&bytes).ok_or_else(|| SalesError::decode(&path.display().to_string()))?;

    Ok(split_lines(&text))
}

/// Decode raw bytes with the first encoding that accepts them
pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    candidate_encodings().into_iter().find_map(|encoding| {
        let decoded = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
        debug!(encoding = encoding.name(), "decoded sales log");
        Some(decoded.into_owned())
    })
}

/// Split decoded text into trimmed, non-blank lines and drop a leading header
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines
        .first()
        .is_some_and(|first| first.to_lowercase().starts_with(HEADER_PREFIX))
    {
        lines.remove(0);
    }

    lines
}
