use logoaudit_core::Category;

/// Per-category detail reported alongside the score, one variant per
/// response family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryDetail {
    /// Actionable fix instruction (fix-style contracts).
    Fix(String),
    /// Defect tags that fired (bug-style contracts).
    Bugs(Vec<String>),
}

/// One validated category entry from a model response.
///
/// `score` is `None` when the model reported `null`, legitimate only for
/// existence-gated categories, where it means "not applicable" rather than
/// "bad".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult {
    pub score: Option<u8>,
    pub reason: String,
    pub detail: CategoryDetail,
}

/// One validated model response for one tile.
///
/// Slots are aligned with the contract's category list; a `None` slot means
/// the model omitted that category and the flattener applies the family
/// default.
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub categories: Vec<(Category, Option<CategoryResult>)>,
}
