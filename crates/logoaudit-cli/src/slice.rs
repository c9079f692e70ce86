//! Slice command handler.
//!
//! Per-screenshot failures (bad filename, undecodable image) are logged and
//! skipped rather than propagated so a single bad file does not abort the
//! full run. A missing input directory or an empty one is fatal before any
//! processing begins.

use std::path::{Path, PathBuf};

use logoaudit_slicer::{slice_grid, SlicerError};

/// Collects the grid screenshots (`.png` / `.jpg`) directly under `input`.
fn find_screenshots(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        anyhow::bail!("screenshots directory {} does not exist", input.display());
    }

    let mut screenshots: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("png" | "jpg" | "jpeg")
            )
        })
        .collect();
    screenshots.sort();
    Ok(screenshots)
}

pub(crate) fn run_slice(input: &Path, output: &Path, rows: u32, cols: u32) -> anyhow::Result<()> {
    let screenshots = find_screenshots(input)?;
    if screenshots.is_empty() {
        anyhow::bail!(
            "no screenshots found in {}; add files like hue_coffee.png",
            input.display()
        );
    }

    let mut batches = 0usize;
    let mut tiles = 0usize;

    for screenshot in &screenshots {
        match slice_grid(screenshot, rows, cols, output) {
            Ok(written) => {
                println!(
                    "sliced {} into {} tiles",
                    screenshot.display(),
                    written.len()
                );
                batches += 1;
                tiles += written.len();
            }
            Err(e @ (SlicerError::Naming { .. } | SlicerError::ImageOpen { .. })) => {
                eprintln!("skipping {}: {e}", screenshot.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("done: {tiles} tiles across {batches} batches in {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_slice(&dir.path().join("nope"), dir.path(), 3, 3);
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_slice(dir.path(), dir.path(), 3, 3);
        assert!(result.is_err());
    }

    #[test]
    fn bad_screenshot_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("shots");
        std::fs::create_dir(&input).unwrap();
        // One well-formed batch and one with a bad filename.
        image::RgbImage::new(30, 30)
            .save(input.join("hue_coffee.png"))
            .unwrap();
        image::RgbImage::new(30, 30)
            .save(input.join("badname.png"))
            .unwrap();

        let output = dir.path().join("slices");
        run_slice(&input, &output, 3, 3).unwrap();

        assert!(output.join("hue_coffee").join("hue_coffee_09.png").exists());
        assert!(!output.join("badname").exists());
    }
}
