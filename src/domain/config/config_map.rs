use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::domain::config::JobConfig;

/// Immutable key/value configuration with dotted string keys
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Config {
    entries: BTreeMap<String, String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns a copy of this configuration with `key` set to `value`
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn app_class(&self) -> Option<&str> {
        self.get(JobConfig::APP_CLASS)
    }

    pub fn task_class(&self) -> Option<&str> {
        self.get(JobConfig::TASK_CLASS)
    }

    pub fn config_rewriters(&self) -> Option<&str> {
        self.get(JobConfig::CONFIG_REWRITERS)
    }

    pub fn config_rewriter_class(&self, name: &str) -> Option<&str> {
        self.get(&JobConfig::config_rewriter_class_key(name))
    }
}

impl<K, V> FromIterator<(K, V)> for Config
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_with_leaves_original_untouched() {
        let original = Config::from_iter([("a.b", "1")]);
        let updated = original.with("a.b", "2").with("c", "3");
        assert_eq!(original.get("a.b"), Some("1"));
        assert_eq!(original.get("c"), None);
        assert_eq!(updated.get("a.b"), Some("2"));
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_len_and_is_empty() {
        let empty = Config::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        let one = empty.with("job.name", "wordcount");
        assert!(!one.is_empty());
        assert_eq!(one.len(), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_typed_accessors() {
        let config = Config::from_iter([
            ("app.class", "com.example.App"),
            ("task.class", "com.example.Task"),
            ("job.config.rewriters", "env,site"),
            ("job.config.rewriter.env.class", "EnvironmentConfigRewriter"),
        ]);
        assert_eq!(config.app_class(), Some("com.example.App"));
        assert_eq!(config.task_class(), Some("com.example.Task"));
        assert_eq!(config.config_rewriters(), Some("env,site"));
        assert_eq!(config.config_rewriter_class("env"), Some("EnvironmentConfigRewriter"));
        assert_eq!(config.config_rewriter_class("site"), None);
    }

    #[test]
    fn test_parse_flat_json_object() {
        let json = r#"{"job.name":"wordcount","task.class":"Counter"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.get("job.name"), Some("wordcount"));
        assert_eq!(config.task_class(), Some("Counter"));
    }

    #[test]
    fn test_parse_nested_json_rejected() {
        let json = r#"{"job":{"name":"wordcount"}}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
