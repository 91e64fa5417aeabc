//! Typed application settings.
//!
//! Settings are bound from:
//! - Process environment variables (highest priority)
//! - An env file such as `.env`
//! - Built-in defaults (lowest priority)

mod settings;

pub use secrecy::{ExposeSecret, SecretString};
pub use settings::{AppEnv, ModelConfig, Settings, UseCase};
