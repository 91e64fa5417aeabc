//! Ordered key-value snapshot of an env file.

use std::collections::HashMap;

/// Parsed `KEY=VALUE` pairs from a single env file read.
///
/// Keys are unique. Re-inserting a key replaces its value but keeps the
/// position where the key was first seen, so iteration order is stable
/// across runs over the same file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl EnvMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env file contents.
    ///
    /// Blank lines and lines starting with `#` are skipped. Every other line
    /// is split on its first `=`; key and value are trimmed. Lines without
    /// `=` are ignored.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let mut map = Self::new();

        for (lineno, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) => map.insert(key.trim(), value.trim()),
                None => {
                    tracing::debug!(line = lineno + 1, "Skipping line without '='");
                }
            }
        }

        map
    }

    /// Insert or replace a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Get a variable's raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Get a variable's raw value, or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a variable is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let map = EnvMap::parse("APP_ENV=production\nAPP_PORT=8000\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("APP_ENV"), Some("production"));
        assert_eq!(map.get("APP_PORT"), Some("8000"));
    }

    #[test]
    fn test_parse_trims_key_and_value() {
        let map = EnvMap::parse("   KEY   =   some value  \n");
        assert_eq!(map.get("KEY"), Some("some value"));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let contents = "# header\n\n   \n  # indented comment\nA=1\n";
        let map = EnvMap::parse(contents);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some("1"));
    }

    #[test]
    fn test_parse_only_comments_is_empty() {
        assert!(EnvMap::parse("").is_empty());
        assert!(EnvMap::parse("# one\n# two\n\n").is_empty());
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let map = EnvMap::parse("DATABASE_URL=postgres://u:p@h/db?sslmode=require\n");
        assert_eq!(
            map.get("DATABASE_URL"),
            Some("postgres://u:p@h/db?sslmode=require")
        );
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let map = EnvMap::parse("export\nA=1\nnot a pair\n");
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("export"));
    }

    #[test]
    fn test_parse_empty_value() {
        let map = EnvMap::parse("SECRET_KEY=\n");
        assert_eq!(map.get("SECRET_KEY"), Some(""));
    }

    #[test]
    fn test_parse_keeps_quotes_verbatim() {
        let map = EnvMap::parse("NAME=\"quoted\"\n");
        assert_eq!(map.get("NAME"), Some("\"quoted\""));
    }

    #[test]
    fn test_duplicate_key_last_value_first_position() {
        let map = EnvMap::parse("A=1\nB=2\nA=3\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some("3"));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn test_iter_preserves_first_seen_order() {
        let map = EnvMap::parse("Z=26\nA=1\nM=13\n");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("Z", "26"), ("A", "1"), ("M", "13")]);
    }

    #[test]
    fn test_get_or_default() {
        let map = EnvMap::parse("A=1\n");
        assert_eq!(map.get_or("A", "x"), "1");
        assert_eq!(map.get_or("CORS_ORIGINS", "[]"), "[]");
    }

    #[test]
    fn test_from_iterator() {
        let map: EnvMap = [("A", "1"), ("B", "2"), ("A", "9")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some("9"));
    }
}
