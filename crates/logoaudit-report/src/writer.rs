//! CSV persistence for audit reports.

use std::path::Path;

use logoaudit_core::ContractVersion;

use crate::error::ReportError;
use crate::row::{report_header, ReportRow};

/// Writes the full report to `path`, overwriting any prior file there.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// - [`ReportError::NoRows`] if `rows` is empty; no file is touched.
/// - [`ReportError::Csv`] on serialization or write failure.
pub fn write_report(
    path: &Path,
    contract: ContractVersion,
    rows: &[ReportRow],
) -> Result<usize, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::NoRows);
    }

    if path.exists() {
        tracing::warn!(path = %path.display(), "overwriting existing report");
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let to_err = |e: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    writer.write_record(report_header(contract)).map_err(to_err)?;
    for row in rows {
        writer.write_record(row.values()).map_err(to_err)?;
    }
    writer.flush().map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(rows.len())
}
