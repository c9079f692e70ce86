//! Filename conventions for batches and tiles.

use std::path::Path;

use crate::error::SlicerError;

/// Batch identity parsed from a tile filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMeta {
    pub source: String,
    pub industry: String,
}

/// Parses `(source, industry)` from a grid screenshot filename.
///
/// Expects `<source>_<industry>[...].<ext>`, e.g. `hue_coffee.png`. Anything
/// after the second underscore-delimited part is ignored.
///
/// # Errors
///
/// Returns [`SlicerError::Naming`] if the stem has fewer than two parts, or
/// if either part is empty: `hue_.png` is rejected rather than yielding an
/// empty industry label that would propagate into batch directory names and
/// report columns. Callers should skip the offending screenshot, not abort
/// the run.
pub fn parse_batch_name(filename: &str) -> Result<(String, String), SlicerError> {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let mut parts = stem.split('_');
    match (parts.next(), parts.next()) {
        (Some(source), Some(industry)) if !source.is_empty() && !industry.is_empty() => {
            Ok((source.to_string(), industry.to_string()))
        }
        _ => Err(SlicerError::Naming {
            filename: filename.to_string(),
        }),
    }
}

/// Extracts `(source, industry)` from a tile filename, with defaults.
///
/// Total function: a filename that violates the underscore convention yields
/// `"Unknown"` for both fields rather than an error. A trailing numeric
/// sequence part (`hue_coffee_01.png`) is ignored.
#[must_use]
pub fn tile_metadata(filename: &str) -> TileMeta {
    match parse_batch_name(filename) {
        Ok((source, industry)) => TileMeta { source, industry },
        Err(_) => TileMeta {
            source: "Unknown".to_string(),
            industry: "Unknown".to_string(),
        },
    }
}
