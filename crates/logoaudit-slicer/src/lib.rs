//! Grid slicing and tile filename metadata.
//!
//! Splits one composite grid screenshot into numbered logo tiles and parses
//! `(source, industry)` batch identity out of underscore-delimited filenames.

pub mod error;
pub mod grid;
pub mod meta;

pub use error::SlicerError;
pub use grid::{slice_grid, tile_grid, SlicedTile, TileBounds};
pub use meta::{parse_batch_name, tile_metadata, TileMeta};
