//! Normalization and validation of model responses.
//!
//! Canonicalizes object keys (lowercase, spaces to underscores) at every
//! nesting depth to absorb model capitalization drift, then validates the
//! payload against the contract into a typed [`AuditResult`]. The bug-gating
//! rule runs here: a category with a non-empty defect list has its score
//! forced to the range minimum before flattening.

use logoaudit_core::{ContractVersion, ResponseFamily};
use serde_json::Value;

use crate::error::ModelError;
use crate::types::{AuditResult, CategoryDetail, CategoryResult};

/// Recursively lowercases object keys and replaces spaces with underscores.
///
/// Idempotent: applying it twice yields the same result as applying it once.
#[must_use]
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase().replace(' ', "_"), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Validates a raw model response into a typed [`AuditResult`].
///
/// Keys are normalized first, so `"Industry Relevance"` and
/// `"industry_relevance"` land in the same slot. Categories the contract
/// declares but the response omits become `None` slots; the flattener applies
/// the family default (0, or null where existence-gating applies). A category
/// that is present but not an object, or whose score is neither a number in
/// range nor a permitted null, fails validation.
///
/// # Errors
///
/// Returns [`ModelError::Malformed`] on any schema violation. The caller
/// drops the tile without retry.
pub fn parse_audit(contract: ContractVersion, raw: Value) -> Result<AuditResult, ModelError> {
    let normalized = normalize_keys(raw);
    let Some(map) = normalized.as_object() else {
        return Err(malformed(contract, "response is not a JSON object"));
    };

    let mut categories = Vec::with_capacity(contract.categories().len());
    for category in contract.categories() {
        let Some(entry) = map.get(category.name) else {
            categories.push((*category, None));
            continue;
        };
        let Some(entry) = entry.as_object() else {
            return Err(malformed(
                contract,
                &format!("category \"{}\" is not an object", category.name),
            ));
        };

        let mut score = parse_score(contract, category.name, entry.get("score"))?;
        let reason = entry
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let detail = match contract.family() {
            ResponseFamily::Fix => CategoryDetail::Fix(
                entry
                    .get("suggested_fix")
                    .and_then(Value::as_str)
                    .unwrap_or("None")
                    .to_string(),
            ),
            ResponseFamily::Bugs => {
                let bugs: Vec<String> = entry
                    .get("bugs")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                // A named defect is authoritative over the model's own
                // numeric judgment.
                if !bugs.is_empty() {
                    score = Some(contract.min_score());
                }
                CategoryDetail::Bugs(bugs)
            }
        };

        categories.push((
            *category,
            Some(CategoryResult {
                score,
                reason,
                detail,
            }),
        ));
    }

    Ok(AuditResult { categories })
}

/// The model sometimes emits integral floats (`4.0`) even in JSON mode, so
/// any number with a zero fractional part is accepted before range-checking.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_score(
    contract: ContractVersion,
    category: &str,
    value: Option<&Value>,
) -> Result<Option<u8>, ModelError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let (min, max) = contract.score_range();
            let integral = n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u8::MAX))
                    .map(|v| v as u64)
            });
            let score = integral
                .and_then(|v| u8::try_from(v).ok())
                .filter(|v| (min..=max).contains(v))
                .ok_or_else(|| {
                    malformed(
                        contract,
                        &format!("category \"{category}\" score {n} outside {min}..={max}"),
                    )
                })?;
            Ok(Some(score))
        }
        Some(other) => Err(malformed(
            contract,
            &format!("category \"{category}\" score is not a number: {other}"),
        )),
    }
}

fn malformed(contract: ContractVersion, reason: &str) -> ModelError {
    ModelError::Malformed {
        context: format!("{contract:?} contract"),
        reason: reason.to_string(),
    }
}
