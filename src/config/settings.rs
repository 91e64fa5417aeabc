//! Typed application settings bound from env variables.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use secrecy::SecretString;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::envfile::{load_env_file, EnvMap};
use crate::{Error, Result};

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "unknown environment '{other}', must be one of: development, staging, production"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for AppEnv {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Workload a model configuration is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Chat,
    Document,
    Analysis,
    /// Anything else; uses the `GEMINI_*` settings.
    Default,
}

impl UseCase {
    /// Map a use-case name to a variant. Unknown names map to `Default`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "chat" => Self::Chat,
            "document" => Self::Document,
            "analysis" => Self::Analysis,
            _ => Self::Default,
        }
    }
}

/// Model parameters for one use case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Application settings.
///
/// Built explicitly from an [`EnvMap`] and passed to whatever needs it;
/// there is no process-wide cache. Keys are lower-cased before binding, so
/// `APP_PORT`, `app_port` and `App_Port` all set `app_port`.
///
/// Secrets are [`SecretString`]s: they are skipped when serializing and
/// print as `[REDACTED]` in `Debug` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub app_env: AppEnv,
    pub app_host: String,
    pub app_port: u16,
    pub app_debug: bool,

    #[serde(skip_serializing)]
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_temperature: f64,
    pub gemini_max_tokens: u32,
    pub gemini_top_p: f64,
    pub gemini_thinking_mode: bool,

    pub chat_model: String,
    pub chat_temperature: f64,
    pub chat_max_tokens: u32,
    pub chat_streaming: bool,

    pub doc_model: String,
    pub doc_temperature: f64,
    pub doc_max_tokens: u32,
    pub doc_thinking_mode: bool,

    pub analysis_model: String,
    pub analysis_temperature: f64,
    pub analysis_max_tokens: u32,
    pub analysis_enable_pdf: bool,
    pub analysis_enable_vision: bool,

    pub database_url: String,
    pub database_echo: bool,

    #[serde(skip_serializing)]
    pub secret_key: SecretString,
    pub jwt_expiration: u64,
    #[serde(deserialize_with = "json_string_list")]
    pub cors_origins: Vec<String>,

    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,

    pub upload_dir: PathBuf,
    pub log_dir: PathBuf,
    pub temp_dir: PathBuf,

    #[serde(default, skip_serializing)]
    pub claude_api_key: Option<SecretString>,
    #[serde(default, skip_serializing)]
    pub openai_api_key: Option<SecretString>,
    pub enable_fallback: bool,
}

/// `CORS_ORIGINS` arrives as a JSON array in a single string.
fn json_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    serde_json::from_str(&raw)
        .map_err(|e| de::Error::custom(format!("expected a JSON array of strings: {e}")))
}

/// Builder seeded with every default. Required secrets have none.
fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let builder = Config::builder()
        .set_default("app_name", "AI Application")?
        .set_default("app_env", "development")?
        .set_default("app_host", "0.0.0.0")?
        .set_default("app_port", 8000_i64)?
        .set_default("app_debug", false)?
        .set_default("gemini_model", "gemini-2.5-flash")?
        .set_default("gemini_temperature", 0.7)?
        .set_default("gemini_max_tokens", 1000_i64)?
        .set_default("gemini_top_p", 0.95)?
        .set_default("gemini_thinking_mode", false)?
        .set_default("chat_model", "gemini-2.5-flash")?
        .set_default("chat_temperature", 0.7)?
        .set_default("chat_max_tokens", 1000_i64)?
        .set_default("chat_streaming", true)?
        .set_default("doc_model", "gemini-2.5-pro")?
        .set_default("doc_temperature", 0.5)?
        .set_default("doc_max_tokens", 4000_i64)?
        .set_default("doc_thinking_mode", true)?
        .set_default("analysis_model", "gemini-2.5-pro")?
        .set_default("analysis_temperature", 0.2)?
        .set_default("analysis_max_tokens", 2000_i64)?
        .set_default("analysis_enable_pdf", true)?
        .set_default("analysis_enable_vision", true)?
        .set_default("database_url", "sqlite:///./app.db")?
        .set_default("database_echo", false)?
        .set_default("jwt_expiration", 3600_i64)?
        .set_default("cors_origins", r#"["http://localhost:3000"]"#)?
        .set_default("rate_limit_requests", 100_i64)?
        .set_default("rate_limit_window", 3600_i64)?
        .set_default("upload_dir", "./uploads")?
        .set_default("log_dir", "./logs")?
        .set_default("temp_dir", "/tmp")?
        .set_default("enable_fallback", false)?;
    Ok(builder)
}

/// Env-style source over the entries of a parsed file.
fn file_source(env: &EnvMap) -> Environment {
    let vars: config::Map<String, String> = env
        .iter()
        .map(|(key, value)| (key.to_ascii_lowercase(), value.to_string()))
        .collect();
    Environment::default().source(Some(vars)).try_parsing(true)
}

impl Settings {
    /// Bind settings from a parsed env file.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` or `SECRET_KEY` is missing, if a
    /// value cannot be parsed into its field type, or if the result fails
    /// [`Settings::validate`].
    pub fn from_env_map(env: &EnvMap) -> Result<Self> {
        Self::bind(defaults()?.add_source(file_source(env)))
    }

    /// Load settings from an env file with the process environment on top.
    ///
    /// Process variables win over file entries, whatever the case of either
    /// key. A missing file contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or binding fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let env = load_env_file(path)?;
        Self::bind(
            defaults()?
                .add_source(file_source(&env))
                .add_source(Environment::default().try_parsing(true)),
        )
    }

    fn bind(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.app_port == 0 {
            return Err(Error::config("APP_PORT cannot be 0"));
        }

        if self.rate_limit_window == 0 {
            return Err(Error::config("RATE_LIMIT_WINDOW cannot be 0"));
        }

        if self.app_host.is_empty() {
            return Err(Error::config("APP_HOST cannot be empty"));
        }

        Ok(())
    }

    /// Check if running in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    /// Check if running in development.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    /// Model parameters for a use case.
    #[must_use]
    pub fn model_for_use_case(&self, use_case: UseCase) -> ModelConfig {
        let (model, temperature, max_tokens) = match use_case {
            UseCase::Chat => (&self.chat_model, self.chat_temperature, self.chat_max_tokens),
            UseCase::Document => (&self.doc_model, self.doc_temperature, self.doc_max_tokens),
            UseCase::Analysis => (
                &self.analysis_model,
                self.analysis_temperature,
                self.analysis_max_tokens,
            ),
            UseCase::Default => (
                &self.gemini_model,
                self.gemini_temperature,
                self.gemini_max_tokens,
            ),
        };

        ModelConfig {
            model: model.clone(),
            temperature,
            max_tokens,
        }
    }

    /// Server address as `host:port`.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}
