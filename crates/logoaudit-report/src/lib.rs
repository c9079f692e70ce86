//! Report flattening and persistence for the logo audit pipeline.
//!
//! Converts validated per-tile audit results into flat CSV rows with
//! contract-derived column names, applies optional stratified sampling to
//! bound audit volume, and appends human comparison votes to a flat file.

pub mod error;
pub mod row;
pub mod sample;
pub mod vote;
pub mod writer;

pub use error::ReportError;
pub use row::{flatten_result, report_header, ReportRow};
pub use sample::sample_batch;
pub use vote::{append_vote, VoteRecord};
pub use writer::write_report;
