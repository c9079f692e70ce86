//! Rubric contract definitions.
//!
//! A contract version fixes the set of scored categories, the score range,
//! which categories may legitimately be absent from a design, and whether the
//! model reports a `suggested_fix` string or a `bugs` checklist per category.
//! The contract drives prompt construction, response validation, and report
//! column layout, so the three stay in lockstep by construction.

/// One named rubric dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Canonical lowercase-with-underscores name, as requested from the model.
    pub name: &'static str,
    /// Whether `score: null` is a legitimate "not applicable" answer for this
    /// category rather than a schema violation.
    pub existence_gated: bool,
}

const fn cat(name: &'static str) -> Category {
    Category {
        name,
        existence_gated: false,
    }
}

const fn gated(name: &'static str) -> Category {
    Category {
        name,
        existence_gated: true,
    }
}

/// How the model reports per-category detail alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFamily {
    /// `{score, reason, suggested_fix}`; report column `<Prefix>_Fix`.
    Fix,
    /// `{score, bugs, reason}`; report column `<Prefix>_Bugs`. A non-empty
    /// bug list forces the score to the range minimum.
    Bugs,
}

const PRODUCT_CATEGORIES: &[Category] = &[
    cat("variety"),
    cat("quality"),
    cat("industry_relevance"),
    cat("layout"),
    cat("font"),
    cat("color"),
    cat("icon"),
    cat("container"),
];

const PRODUCT_GATED_CATEGORIES: &[Category] = &[
    cat("variety"),
    cat("quality"),
    cat("industry_relevance"),
    cat("layout"),
    cat("font"),
    cat("color"),
    gated("icon"),
    gated("container"),
];

const BUG_HUNT_CATEGORIES: &[Category] = &[
    cat("layout"),
    cat("text"),
    cat("color"),
    cat("icon"),
    cat("container"),
    cat("cohesiveness"),
];

/// The closed set of scoring contract versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractVersion {
    /// Eight product-quality dimensions; every category is always scored and
    /// a missing one defaults to score 0 in the report.
    #[default]
    Product,
    /// Same dimensions, but `icon` and `container` may be reported as
    /// `score: null` when the design simply has no icon or container shape.
    ProductGated,
    /// Six QA dimensions with an explicit defect-tag checklist per category.
    BugHunt,
}

impl ContractVersion {
    #[must_use]
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Product => PRODUCT_CATEGORIES,
            Self::ProductGated => PRODUCT_GATED_CATEGORIES,
            Self::BugHunt => BUG_HUNT_CATEGORIES,
        }
    }

    #[must_use]
    pub fn family(self) -> ResponseFamily {
        match self {
            Self::Product | Self::ProductGated => ResponseFamily::Fix,
            Self::BugHunt => ResponseFamily::Bugs,
        }
    }

    /// Inclusive score range for every category in this contract.
    #[must_use]
    pub fn score_range(self) -> (u8, u8) {
        (1, 5)
    }

    #[must_use]
    pub fn min_score(self) -> u8 {
        self.score_range().0
    }
}

/// Formats a canonical category name into its report column prefix.
///
/// `industry_relevance` becomes `IndustryRelevance`. Pure function of the
/// name, so reports from separate runs share identical column headers.
#[must_use]
pub fn column_prefix(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
