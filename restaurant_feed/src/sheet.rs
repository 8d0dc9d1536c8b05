//! Reading the sheet export from disk.
//!
//! The export is plain CSV with a header row. Read failures never abort
//! the service - they surface as the structured error payload.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::records::Restaurant;

/// Reasons a sheet read can fail.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The export file could not be opened.
    #[error("failed to open sheet at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be decoded.
    #[error("failed to read sheet row {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

/// Read the sheet and convert every usable row.
///
/// The header row is never emitted; rows missing their id or name are
/// skipped silently (logged at debug).
pub fn load(path: &Path) -> Result<Vec<Restaurant>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| SheetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut restaurants = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // +2: one for the header row, one for 1-based line numbers
        let line = index + 2;
        let row = row.map_err(|source| SheetError::Row { line, source })?;
        match Restaurant::from_row(&row) {
            Some(record) => restaurants.push(record),
            None => debug!(line, "skipping row missing id or name"),
        }
    }
    Ok(restaurants)
}
