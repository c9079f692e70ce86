//! Deterministic grid tiling.
//!
//! Cell size is computed with real division; integer pixel bounds are taken
//! as `floor(c·cw)..floor((c+1)·cw)`, so the tiles partition the source image
//! exactly, with no gaps or overlap and at most one pixel of variation at
//! rounding boundaries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SlicerError;
use crate::meta::parse_batch_name;

/// Pixel bounds of one grid cell, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    /// 1-based row-major sequence number.
    pub seq: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One tile written to disk by [`slice_grid`].
#[derive(Debug, Clone)]
pub struct SlicedTile {
    pub path: PathBuf,
    pub source: String,
    pub industry: String,
    pub seq: u32,
}

/// Computes the row-major tile bounds for an `rows × cols` grid.
///
/// Always returns exactly `rows * cols` entries with contiguous sequence
/// numbers starting at 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tile_grid(width: u32, height: u32, rows: u32, cols: u32) -> Vec<TileBounds> {
    let cell_w = f64::from(width) / f64::from(cols);
    let cell_h = f64::from(height) / f64::from(rows);

    let mut tiles = Vec::with_capacity((rows * cols) as usize);
    let mut seq = 0u32;
    for r in 0..rows {
        let top = (f64::from(r) * cell_h).floor() as u32;
        let bottom = (f64::from(r + 1) * cell_h).floor() as u32;
        for c in 0..cols {
            let left = (f64::from(c) * cell_w).floor() as u32;
            let right = (f64::from(c + 1) * cell_w).floor() as u32;
            seq += 1;
            tiles.push(TileBounds {
                seq,
                x: left,
                y: top,
                width: right - left,
                height: bottom - top,
            });
        }
    }
    tiles
}

/// Slices one grid screenshot into numbered tiles under
/// `<out_root>/<source>_<industry>/`.
///
/// Tiles are named `<source>_<industry>_<NN>.png` with `NN` the 1-based
/// row-major sequence, zero-padded to 2 digits. The batch directory is
/// created if absent.
///
/// # Errors
///
/// - [`SlicerError::Naming`] if the screenshot filename lacks the
///   `<source>_<industry>` convention; skip this file, keep the run going.
/// - [`SlicerError::ImageOpen`] if the image cannot be decoded.
/// - [`SlicerError::Io`] / [`SlicerError::ImageSave`] on write failures.
pub fn slice_grid(
    image_path: &Path,
    rows: u32,
    cols: u32,
    out_root: &Path,
) -> Result<Vec<SlicedTile>, SlicerError> {
    let filename = image_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let (source, industry) = parse_batch_name(filename)?;

    let img = image::open(image_path).map_err(|e| SlicerError::ImageOpen {
        path: image_path.to_path_buf(),
        source: e,
    })?;

    let batch_dir = out_root.join(format!("{source}_{industry}"));
    fs::create_dir_all(&batch_dir).map_err(|e| SlicerError::Io {
        path: batch_dir.clone(),
        source: e,
    })?;

    tracing::info!(
        source,
        industry,
        rows,
        cols,
        width = img.width(),
        height = img.height(),
        "slicing batch"
    );

    let mut written = Vec::new();
    for bounds in tile_grid(img.width(), img.height(), rows, cols) {
        let tile = img.crop_imm(bounds.x, bounds.y, bounds.width, bounds.height);
        let tile_path = batch_dir.join(format!("{source}_{industry}_{:02}.png", bounds.seq));
        tile.save(&tile_path).map_err(|e| SlicerError::ImageSave {
            path: tile_path.clone(),
            source: e,
        })?;
        written.push(SlicedTile {
            path: tile_path,
            source: source.clone(),
            industry: industry.clone(),
            seq: bounds.seq,
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Union of tile bounds must cover the image exactly, row-major.
    fn assert_partition(width: u32, height: u32, rows: u32, cols: u32) {
        let tiles = tile_grid(width, height, rows, cols);
        assert_eq!(tiles.len(), (rows * cols) as usize);

        let mut covered = vec![0u8; (width as usize) * (height as usize)];
        for t in &tiles {
            for y in t.y..t.y + t.height {
                for x in t.x..t.x + t.width {
                    covered[(y as usize) * (width as usize) + (x as usize)] += 1;
                }
            }
        }
        assert!(
            covered.iter().all(|&c| c == 1),
            "tiles must cover every pixel exactly once ({width}x{height} {rows}x{cols})"
        );
    }

    #[test]
    fn even_grid_partitions_exactly() {
        assert_partition(300, 1000, 10, 3);
    }

    #[test]
    fn uneven_grid_partitions_exactly() {
        assert_partition(301, 997, 10, 3);
        assert_partition(100, 100, 7, 3);
    }

    #[test]
    fn sequence_is_row_major_and_deterministic() {
        let first = tile_grid(300, 1000, 10, 3);
        let second = tile_grid(300, 1000, 10, 3);
        assert_eq!(first, second);

        // seq 1 = row0/col0, seq 2 = row0/col1.
        assert_eq!(first[0].seq, 1);
        assert_eq!((first[0].x, first[0].y), (0, 0));
        assert_eq!(first[1].seq, 2);
        assert_eq!((first[1].x, first[1].y), (100, 0));
        // First tile of the second row.
        assert_eq!((first[3].x, first[3].y), (0, 100));
    }

    #[test]
    fn even_grid_tiles_are_uniform() {
        let tiles = tile_grid(300, 1000, 10, 3);
        assert!(tiles.iter().all(|t| t.width == 100 && t.height == 100));
    }

    #[test]
    fn slices_named_batch_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("hue_coffee.png");
        image::RgbImage::new(300, 1000).save(&src).unwrap();

        let out_root = dir.path().join("slices");
        let tiles = slice_grid(&src, 10, 3, &out_root).unwrap();

        assert_eq!(tiles.len(), 30);
        assert_eq!(
            tiles[0].path,
            out_root.join("hue_coffee").join("hue_coffee_01.png")
        );
        assert_eq!(
            tiles[29].path,
            out_root.join("hue_coffee").join("hue_coffee_30.png")
        );
        for t in &tiles {
            assert!(t.path.exists(), "missing tile {:?}", t.path);
            let img = image::open(&t.path).unwrap();
            assert_eq!((img.width(), img.height()), (100, 100));
        }
    }

    #[test]
    fn bad_batch_name_is_a_naming_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("screenshot.png");
        image::RgbImage::new(30, 30).save(&src).unwrap();

        let result = slice_grid(&src, 3, 3, dir.path());
        assert!(matches!(result, Err(SlicerError::Naming { .. })));
    }

    #[test]
    fn unreadable_image_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("hue_coffee.png");
        std::fs::write(&src, b"not an image").unwrap();

        let result = slice_grid(&src, 3, 3, dir.path());
        assert!(matches!(result, Err(SlicerError::ImageOpen { .. })));
    }
}
