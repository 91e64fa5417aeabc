//! Required variables and placeholder detection.

use super::Finding;
use crate::envfile::EnvMap;

/// Variables that must be set, with the description used in messages.
pub const REQUIRED_VARS: &[(&str, &str)] = &[
    ("GEMINI_API_KEY", "Google Gemini API key"),
    ("SECRET_KEY", "Application secret key"),
    ("DATABASE_URL", "Database connection string"),
];

/// Stand-in values shipped in templates that mean "never configured".
pub const PLACEHOLDER_VALUES: &[&str] = &["", "your-secret-key-here", "your-gemini-api-key-here"];

/// Report required variables that are missing or still hold a placeholder.
///
/// Issues follow [`REQUIRED_VARS`] order.
#[must_use]
pub fn validate_required_vars(env: &EnvMap) -> Vec<Finding> {
    let issues: Vec<_> = REQUIRED_VARS
        .iter()
        .filter_map(|&(var, description)| match env.get(var) {
            None => Some(Finding::issue(var, format!("Missing required: {description}"))),
            Some(value) if PLACEHOLDER_VALUES.contains(&value) => Some(Finding::issue(
                var,
                format!("Replace placeholder value for: {description}"),
            )),
            Some(_) => None,
        })
        .collect();

    tracing::debug!(issues = issues.len(), "Checked required variables");
    issues
}
