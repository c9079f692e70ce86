//! Flattening of nested per-category results into wide tabular rows.

use logoaudit_core::{column_prefix, ContractVersion, ResponseFamily};
use logoaudit_model::{AuditResult, CategoryDetail, CategoryResult};

/// One flat report row: fixed metadata columns plus three cells per contract
/// category, in contract order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub source: String,
    pub industry: String,
    pub filename: String,
    /// Per-category cells: score, fix-or-bugs, reason, three per category.
    pub cells: Vec<String>,
}

impl ReportRow {
    /// All cell values in header order, metadata first.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        let mut out = vec![
            self.source.as_str(),
            self.industry.as_str(),
            self.filename.as_str(),
        ];
        out.extend(self.cells.iter().map(String::as_str));
        out
    }
}

/// Column names for a report under the given contract.
///
/// `Source, Industry, Filename` followed by `<Prefix>_Score`,
/// `<Prefix>_Fix` or `<Prefix>_Bugs`, and `<Prefix>_Reason` per category.
/// Pure function of the contract, stable across runs, so reports from
/// separate sessions can be concatenated.
#[must_use]
pub fn report_header(contract: ContractVersion) -> Vec<String> {
    let detail_suffix = match contract.family() {
        ResponseFamily::Fix => "Fix",
        ResponseFamily::Bugs => "Bugs",
    };
    let mut columns = vec![
        "Source".to_string(),
        "Industry".to_string(),
        "Filename".to_string(),
    ];
    for category in contract.categories() {
        let prefix = column_prefix(category.name);
        columns.push(format!("{prefix}_Score"));
        columns.push(format!("{prefix}_{detail_suffix}"));
        columns.push(format!("{prefix}_Reason"));
    }
    columns
}

/// Flattens one validated audit result into a [`ReportRow`].
///
/// A missing score renders as `0` for contracts without existence-gating and
/// as an empty cell where the category is gated, so downstream averaging can
/// exclude not-applicable entries. Bug lists are joined with `|`; an empty
/// list renders as `None`.
#[must_use]
pub fn flatten_result(
    contract: ContractVersion,
    source: &str,
    industry: &str,
    filename: &str,
    audit: &AuditResult,
) -> ReportRow {
    let mut cells = Vec::with_capacity(contract.categories().len() * 3);

    for (category, result) in &audit.categories {
        let score_cell = match result.as_ref().and_then(|r| r.score) {
            Some(score) => score.to_string(),
            None if category.existence_gated => String::new(),
            None => "0".to_string(),
        };
        let detail_cell = match result.as_ref().map(|r| &r.detail) {
            Some(CategoryDetail::Fix(fix)) => fix.clone(),
            Some(CategoryDetail::Bugs(bugs)) if !bugs.is_empty() => bugs.join("|"),
            _ => "None".to_string(),
        };
        let reason_cell = result.as_ref().map(|r| r.reason.clone()).unwrap_or_default();

        cells.push(score_cell);
        cells.push(detail_cell);
        cells.push(reason_cell);
    }

    ReportRow {
        source: source.to_string(),
        industry: industry.to_string(),
        filename: filename.to_string(),
        cells,
    }
}
