//! Reading env files and locating templates.

use std::io::ErrorKind;
use std::path::Path;

use super::EnvMap;
use crate::Result;

/// Template files offered when the target env file is missing.
pub const TEMPLATE_FILES: &[&str] = &[".env.simple", ".env.complete", ".env.example"];

/// Load an env file into an [`EnvMap`].
///
/// A file that does not exist yields an empty map; callers that need to
/// tell "missing" apart from "empty" check existence first.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read as UTF-8 text.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<EnvMap> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Env file not found, using empty map");
            return Ok(EnvMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let map = EnvMap::parse(&contents);
    tracing::debug!(path = %path.display(), variables = map.len(), "Loaded env file");
    Ok(map)
}

/// List the known template files present in `dir`, in [`TEMPLATE_FILES`] order.
#[must_use]
pub fn find_templates(dir: impl AsRef<Path>) -> Vec<&'static str> {
    let dir = dir.as_ref();
    TEMPLATE_FILES
        .iter()
        .copied()
        .filter(|name| dir.join(name).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let map = load_env_file(tmp.path().join(".env")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_load_reads_pairs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".env");
        fs::write(&path, "# comment\nAPP_ENV = staging \nGEMINI_MODEL=gemini-2.5-pro\n").unwrap();

        let map = load_env_file(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("APP_ENV"), Some("staging"));
        assert_eq!(map.get("GEMINI_MODEL"), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_load_round_trip_trims_whitespace() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".env");
        fs::write(&path, "  KEY  =  VALUE  ").unwrap();

        let map = load_env_file(&path).unwrap();
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("KEY", "VALUE")]);
    }

    #[test]
    fn test_load_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_env_file(tmp.path());
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_utf8_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".env");
        fs::write(&path, b"A=\xff\xfe").unwrap();

        let result = load_env_file(&path);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_find_templates_none() {
        let tmp = TempDir::new().unwrap();
        assert!(find_templates(tmp.path()).is_empty());
    }

    #[test]
    fn test_find_templates_in_declared_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env.example"), "").unwrap();
        fs::write(tmp.path().join(".env.simple"), "").unwrap();
        fs::write(tmp.path().join(".env.other"), "").unwrap();

        assert_eq!(find_templates(tmp.path()), vec![".env.simple", ".env.example"]);
    }
}
