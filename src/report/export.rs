//! Enriched dataset export
//!
//! Writes the enriched working set to disk in the pipe-delimited export
//! format. Runs even when the report is skipped: an empty set produces a
//! header-only file.

use crate::io::pipe_format::write_enriched;
use crate::types::{EnrichedRecord, SalesError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `records` to `path`, creating the parent directory if needed
pub fn export_enriched(path: &Path, records: &[EnrichedRecord]) -> Result<(), SalesError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut output = BufWriter::new(File::create(path)?);
    write_enriched(records, &mut output)?;
    output.flush()?;

    info!(path = %path.display(), records = records.len(), "enriched data saved");
    Ok(())
}
