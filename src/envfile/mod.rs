//! Env file parsing.
//!
//! This module provides:
//! - [`EnvMap`], the ordered key-value snapshot of one file read
//! - Loading from disk with missing files treated as empty
//! - Template discovery for the missing-file hint

mod loader;
mod map;

pub use loader::{find_templates, load_env_file, TEMPLATE_FILES};
pub use map::EnvMap;
