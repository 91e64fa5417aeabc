//! Gemini model name allow-list.

use super::Finding;
use crate::envfile::EnvMap;

/// Model identifiers currently accepted, in display order.
pub const VALID_GEMINI_MODELS: &[&str] = &[
    "gemini-2.5-pro",
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "models/text-embedding-004",
];

/// Report Gemini model variables set to an unknown model.
///
/// A variable is checked when its key contains both `MODEL` and `GEMINI`
/// (case-sensitive). Empty values are skipped.
#[must_use]
pub fn validate_model_names(env: &EnvMap) -> Vec<Finding> {
    env.iter()
        .filter(|(key, _)| key.contains("MODEL") && key.contains("GEMINI"))
        .filter(|(_, model)| !model.is_empty() && !VALID_GEMINI_MODELS.contains(model))
        .map(|(key, model)| {
            Finding::issue(
                key,
                format!(
                    "Invalid model '{model}'. Valid models: {}",
                    VALID_GEMINI_MODELS.join(", ")
                ),
            )
        })
        .collect()
}
