//! Env Validator - checks a `.env` file before an application starts
//!
//! Exit status: 0 when no issues are found, 1 when issues are found, 2 when
//! the file is missing or unreadable.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_validator::envfile::{find_templates, load_env_file};
use env_validator::observability::{config_from_env, init_tracing};
use env_validator::report::{render_missing_file, render_report, Style};
use env_validator::{validate, EnvMap, Result, Settings};

const EXIT_ISSUES: u8 = 1;
const EXIT_NO_INPUT: u8 = 2;

/// Validate a .env configuration file
#[derive(Parser, Debug)]
#[command(name = "validate-env")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Env file to validate
    #[arg(default_value = ".env")]
    env_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&config_from_env());

    tracing::debug!(
        env_file = %cli.env_file.display(),
        "Env validator v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    match run(&cli.env_file, &Style::detect()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Validation aborted");
            eprintln!("error: {e}");
            ExitCode::from(EXIT_NO_INPUT)
        }
    }
}

fn run(path: &Path, style: &Style) -> Result<ExitCode> {
    if !path.exists() {
        let templates = find_templates(".");
        print!("{}", render_missing_file(path, &templates, style));
        return Ok(ExitCode::from(EXIT_NO_INPUT));
    }

    let env = load_env_file(path)?;
    let report = validate(&env);
    print!("{}", render_report(path, &env, &report, style));

    match describe_settings(&env) {
        Ok(json) => tracing::debug!(settings = %json, "Resolved settings"),
        Err(e) => tracing::info!(error = %e, "Env file does not bind to typed settings"),
    }

    Ok(if report.has_issues() {
        ExitCode::from(EXIT_ISSUES)
    } else {
        ExitCode::SUCCESS
    })
}

fn describe_settings(env: &EnvMap) -> Result<String> {
    let settings = Settings::from_env_map(env)?;
    tracing::debug!(
        production = settings.is_production(),
        addr = %settings.server_addr(),
        "Settings bound"
    );
    Ok(serde_json::to_string(&settings)?)
}
