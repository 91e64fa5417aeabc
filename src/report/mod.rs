//! Human-readable validation output.
//!
//! Rendering is pure: functions build a `String` and the caller decides
//! where it goes. All styling flows through [`Style`].

mod style;

pub use style::{Style, Symbols};

use std::path::Path;

use crate::envfile::EnvMap;
use crate::rules::{Finding, ValidationReport};

/// Marker shown for summary keys that are absent.
pub const NOT_SET: &str = "Not set";

/// Keys echoed in the configuration summary, with their labels.
pub const SUMMARY_KEYS: &[(&str, &str)] = &[
    ("Environment", "APP_ENV"),
    ("Default Model", "GEMINI_MODEL"),
    ("Chat Model", "CHAT_MODEL"),
    ("Debug Mode", "APP_DEBUG"),
];

const TITLE: &str = "Environment Configuration Validator";
const RULE_WIDTH: usize = 50;
const DEFAULT_TEMPLATE: &str = ".env.simple";

/// Render the full validation report.
#[must_use]
pub fn render_report(
    path: &Path,
    env: &EnvMap,
    report: &ValidationReport,
    style: &Style,
) -> String {
    let mut lines = vec![
        style.heading(TITLE).to_string(),
        style.heading(&"=".repeat(RULE_WIDTH)).to_string(),
        String::new(),
        format!("Checking: {}", path.display()),
        format!("Total variables found: {}", env.len()),
    ];

    if report.is_clean() {
        lines.push(String::new());
        lines.push(
            style
                .success(&format!(
                    "{} All checks passed! Your configuration looks good.",
                    style.symbols.success
                ))
                .to_string(),
        );
    } else {
        if !report.issues.is_empty() {
            lines.push(String::new());
            lines.push(
                style
                    .error(&format!(
                        "{} Issues Found ({}):",
                        style.symbols.failure,
                        report.issues.len()
                    ))
                    .to_string(),
            );
            lines.extend(
                report
                    .issues
                    .iter()
                    .map(|issue| style.error(&bullet(style, issue)).to_string()),
            );
        }

        if !report.warnings.is_empty() {
            lines.push(String::new());
            lines.push(
                style
                    .warning(&format!(
                        "{} Warnings ({}):",
                        style.symbols.warning,
                        report.warnings.len()
                    ))
                    .to_string(),
            );
            lines.extend(
                report
                    .warnings
                    .iter()
                    .map(|warning| style.warning(&bullet(style, warning)).to_string()),
            );
        }
    }

    lines.push(String::new());
    lines.push(style.heading("Current Configuration:").to_string());
    for (label, key) in SUMMARY_KEYS {
        lines.push(format!(
            "   {} {label}: {}",
            style.symbols.bullet,
            env.get_or(key, NOT_SET)
        ));
    }

    finish(lines)
}

/// Render guidance for a target file that does not exist.
///
/// `templates` are the template files found next to the target; the hint
/// suggests the first one.
#[must_use]
pub fn render_missing_file(path: &Path, templates: &[&str], style: &Style) -> String {
    let mut lines = vec![
        style
            .error(&format!(
                "{} Error: {} not found!",
                style.symbols.failure,
                path.display()
            ))
            .to_string(),
        String::new(),
        "Available templates:".to_string(),
    ];

    if templates.is_empty() {
        lines.push("   (none found)".to_string());
    } else {
        lines.extend(
            templates
                .iter()
                .map(|t| format!("   {} {t}", style.symbols.bullet)),
        );
    }

    let template = templates.first().copied().unwrap_or(DEFAULT_TEMPLATE);
    lines.push(String::new());
    lines.push("Copy a template to get started:".to_string());
    lines.push(format!("   cp {template} {}", path.display()));

    finish(lines)
}

fn bullet(style: &Style, finding: &Finding) -> String {
    format!("   {} {finding}", style.symbols.bullet)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
