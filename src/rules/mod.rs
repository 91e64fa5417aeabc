//! Validation rules over an [`EnvMap`].
//!
//! Every rule is a total function: malformed values become findings, never
//! errors. Issues block (non-zero exit), warnings are advisory.

mod models;
mod numeric;
mod required;
mod security;

use std::fmt;

use crate::envfile::EnvMap;

pub use models::{validate_model_names, VALID_GEMINI_MODELS};
pub use numeric::{validate_numeric_ranges, MAX_TOKENS_RANGE, TEMPERATURE_RANGE};
pub use required::{validate_required_vars, PLACEHOLDER_VALUES, REQUIRED_VARS};
pub use security::check_security;

/// How a finding affects the outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking problem; the run fails.
    Issue,
    /// Advisory observation; the run still passes.
    Warning,
}

/// A single rule result attached to a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Whether this blocks the run.
    pub severity: Severity,
    /// Variable the finding refers to.
    pub key: String,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    /// Create a blocking finding.
    pub fn issue(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Issue,
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an advisory finding.
    pub fn warning(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Combined outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Blocking findings, in rule order.
    pub issues: Vec<Finding>,
    /// Advisory findings, in rule order.
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    /// True when nothing was found at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    /// True when at least one blocking finding exists.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Run every rule over `env`.
///
/// Issues are the concatenation of the required-variable, model-name and
/// numeric-range rules, in that order. Warnings come from the security
/// heuristics.
#[must_use]
pub fn validate(env: &EnvMap) -> ValidationReport {
    let mut issues = validate_required_vars(env);
    issues.extend(validate_model_names(env));
    issues.extend(validate_numeric_ranges(env));

    let warnings = check_security(env);

    tracing::debug!(
        variables = env.len(),
        issues = issues.len(),
        warnings = warnings.len(),
        "Validation complete"
    );

    ValidationReport { issues, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs.iter().copied().collect()
    }

    fn valid_base() -> Vec<(&'static str, &'static str)> {
        vec![
            ("GEMINI_API_KEY", "AIza-real-key"),
            ("SECRET_KEY", "3f9c2b1a"),
            ("DATABASE_URL", "sqlite:///./app.db"),
        ]
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::issue("SECRET_KEY", "Missing required: Application secret key");
        assert_eq!(
            finding.to_string(),
            "SECRET_KEY: Missing required: Application secret key"
        );
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(Finding::warning("A", "b").severity, Severity::Warning);
    }

    #[test]
    fn test_empty_env_reports_three_missing() {
        let report = validate(&EnvMap::new());
        assert_eq!(report.issues.len(), 3);
        assert!(report
            .issues
            .iter()
            .all(|i| i.message.starts_with("Missing required: ")));
        assert!(report.warnings.is_empty());
        assert!(report.has_issues());
    }

    #[test]
    fn test_valid_env_is_clean() {
        let mut pairs = valid_base();
        pairs.push(("GEMINI_MODEL", "gemini-2.5-flash"));
        pairs.push(("GEMINI_TEMPERATURE", "0.7"));
        pairs.push(("GEMINI_MAX_TOKENS", "1000"));
        let report = validate(&env(&pairs));
        assert!(report.is_clean());
        assert!(!report.has_issues());
    }

    #[test]
    fn test_issue_order_across_rules() {
        let report = validate(&env(&[
            ("CHAT_MAX_TOKENS", "0"),
            ("GEMINI_MODEL", "gemini-1.0-pro"),
            ("GEMINI_TEMPERATURE", "5"),
        ]));
        let keys: Vec<_> = report.issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "GEMINI_API_KEY",
                "SECRET_KEY",
                "DATABASE_URL",
                "GEMINI_MODEL",
                "GEMINI_TEMPERATURE",
                "CHAT_MAX_TOKENS",
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_make_issues() {
        let mut pairs = valid_base();
        pairs.push(("CORS_ORIGINS", "[\"*\"]"));
        let report = validate(&env(&pairs));
        assert!(!report.has_issues());
        assert!(!report.is_clean());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_placeholder_secret_is_issue_and_warning() {
        let report = validate(&env(&[
            ("GEMINI_API_KEY", "k"),
            ("SECRET_KEY", "your-secret-key-here"),
            ("DATABASE_URL", "sqlite:///x"),
        ]));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].key, "SECRET_KEY");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].key, "SECRET_KEY");
    }

    #[test]
    fn test_validate_is_deterministic() {
        let map = EnvMap::parse("GEMINI_TEMPERATURE=9\nCHAT_TEMPERATURE=x\nAPP_DEBUG=TRUE\n");
        assert_eq!(validate(&map), validate(&map));
    }
}
