//! Env Validator Library
//!
//! Checks `.env` configuration files for AI applications against a fixed
//! rule set, and binds them into typed application settings.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod envfile;
pub mod error;
pub mod observability;
pub mod report;
pub mod rules;

pub use crate::config::Settings;
pub use envfile::EnvMap;
pub use error::{Error, Result};
pub use rules::{validate, Finding, Severity, ValidationReport};
