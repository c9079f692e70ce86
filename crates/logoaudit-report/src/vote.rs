//! Append-only sink for human comparison votes.
//!
//! The vote-collection UI shows two logos side by side; each click emits one
//! record here. Storage is a flat CSV file with the header written only when
//! the file is created, so records accumulate across sessions.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One pairwise comparison outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub user: String,
    pub winner_source: String,
    pub loser_source: String,
    pub industry: String,
    pub timestamp: DateTime<Utc>,
    pub winner_filename: String,
    pub loser_filename: String,
}

/// Appends one vote to the results file, creating it (with a header row) if
/// absent.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] / [`ReportError::Io`] on write failure.
pub fn append_vote(path: &Path, record: &VoteRecord) -> Result<(), ReportError> {
    let write_header = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    writer.serialize(record).map_err(|e| ReportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
