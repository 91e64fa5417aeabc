//! Security hygiene heuristics. These only ever produce warnings.

use super::Finding;
use crate::envfile::EnvMap;

/// Report risky-but-valid settings.
#[must_use]
pub fn check_security(env: &EnvMap) -> Vec<Finding> {
    let mut warnings = Vec::new();

    let debug = env.get_or("APP_DEBUG", "").eq_ignore_ascii_case("true");
    if debug && env.get("APP_ENV") == Some("production") {
        warnings.push(Finding::warning(
            "APP_DEBUG",
            "Debug mode should be disabled in production",
        ));
    }

    if env.get_or("SECRET_KEY", "").starts_with("your-") {
        warnings.push(Finding::warning(
            "SECRET_KEY",
            "Using placeholder secret key - generate a secure one",
        ));
    }

    if env.get_or("CORS_ORIGINS", "[]").contains('*') {
        warnings.push(Finding::warning(
            "CORS_ORIGINS",
            "Using wildcard CORS origin is insecure",
        ));
    }

    tracing::debug!(warnings = warnings.len(), "Checked security heuristics");
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warned_keys(pairs: &[(&str, &str)]) -> Vec<String> {
        let env: EnvMap = pairs.iter().copied().collect();
        check_security(&env).into_iter().map(|w| w.key).collect()
    }

    #[test]
    fn test_debug_in_production() {
        assert_eq!(
            warned_keys(&[("APP_DEBUG", "true"), ("APP_ENV", "production")]),
            vec!["APP_DEBUG"]
        );
    }

    #[test]
    fn test_debug_flag_is_case_insensitive() {
        assert_eq!(
            warned_keys(&[("APP_DEBUG", "TRUE"), ("APP_ENV", "production")]),
            vec!["APP_DEBUG"]
        );
    }

    #[test]
    fn test_debug_in_development_is_fine() {
        assert!(warned_keys(&[("APP_DEBUG", "true"), ("APP_ENV", "development")]).is_empty());
    }

    #[test]
    fn test_env_match_is_exact() {
        assert!(warned_keys(&[("APP_DEBUG", "true"), ("APP_ENV", "Production")]).is_empty());
        assert!(warned_keys(&[("APP_DEBUG", "1"), ("APP_ENV", "production")]).is_empty());
    }

    #[test]
    fn test_placeholder_secret_prefix() {
        assert_eq!(
            warned_keys(&[("SECRET_KEY", "your-own-value")]),
            vec!["SECRET_KEY"]
        );
        assert!(warned_keys(&[("SECRET_KEY", "my-your-key")]).is_empty());
    }

    #[test]
    fn test_wildcard_cors() {
        assert_eq!(
            warned_keys(&[("CORS_ORIGINS", "[\"*\"]")]),
            vec!["CORS_ORIGINS"]
        );
        assert!(warned_keys(&[("CORS_ORIGINS", "[\"https://app.example.com\"]")]).is_empty());
    }

    #[test]
    fn test_absent_keys_never_warn() {
        assert!(warned_keys(&[]).is_empty());
    }

    #[test]
    fn test_all_warnings_in_order() {
        let message_keys = warned_keys(&[
            ("CORS_ORIGINS", "*"),
            ("SECRET_KEY", "your-secret-key-here"),
            ("APP_ENV", "production"),
            ("APP_DEBUG", "True"),
        ]);
        assert_eq!(message_keys, vec!["APP_DEBUG", "SECRET_KEY", "CORS_ORIGINS"]);
    }
}
