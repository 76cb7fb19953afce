use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_BODY_LINE_LENGTH, DEFAULT_MAX_SUBJECT_LENGTH,
};
use crate::warning;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// one entry of the commit type catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitType {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
}

impl CommitType {
    fn new(name: &str, description: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// read-only settings handed to the flow at session start
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub types: Vec<CommitType>,
    pub use_emoji: bool,
    pub skip_scope: bool,
    pub skip_body: bool,
    pub skip_footer: bool,
    pub max_subject_length: usize,
    pub max_body_line_length: usize,
    /// reject capitalised subjects and trailing periods
    pub strict_subject: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: default_types(),
            use_emoji: false,
            skip_scope: false,
            skip_body: false,
            skip_footer: false,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
            max_body_line_length: DEFAULT_MAX_BODY_LINE_LENGTH,
            strict_subject: false,
        }
    }
}

fn default_types() -> Vec<CommitType> {
    vec![
        CommitType::new("feat", "A new feature", "✨"),
        CommitType::new("fix", "A bug fix", "🐛"),
        CommitType::new("docs", "Documentation only changes", "📚"),
        CommitType::new(
            "style",
            "Changes that do not affect the meaning of the code",
            "💎",
        ),
        CommitType::new(
            "refactor",
            "A code change that neither fixes a bug nor adds a feature",
            "📦",
        ),
        CommitType::new("perf", "A code change that improves performance", "🚀"),
        CommitType::new(
            "test",
            "Adding missing tests or correcting existing tests",
            "🚨",
        ),
        CommitType::new(
            "build",
            "Changes that affect the build system or external dependencies",
            "🛠",
        ),
        CommitType::new(
            "ci",
            "Changes to our CI configuration files and scripts",
            "⚙️",
        ),
        CommitType::new(
            "chore",
            "Other changes that don't modify src or test files",
            "♻️",
        ),
        CommitType::new("revert", "Reverts a previous commit", "🗑"),
    ]
}

impl Config {
    /// load from the first readable config file, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&search_paths())
    }

    /// try each path in order; the first file that parses wins
    pub fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths.iter().filter(|p| p.is_file()) {
            match Self::read(path) {
                Ok(config) => return config.normalised(),
                Err(e) => warning!("ignoring {}: {:#}", path.display(), e),
            }
        }
        Self::default()
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).context("failed to read config file")?;
        serde_json::from_str(&text).context("failed to parse config file")
    }

    fn normalised(mut self) -> Self {
        if self.types.is_empty() {
            warning!("config defines no commit types, using the defaults");
            self.types = default_types();
        }
        self
    }

    /// look up a catalog entry by its type name
    pub fn find_type(&self, name: &str) -> Option<&CommitType> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// candidate config locations, most specific first
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE_NAME));
        paths.push(home.join(".config").join(CONFIG_DIR_NAME).join("config.json"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_catalog_has_common_types() {
        let config = Config::default();
        for name in ["feat", "fix", "docs", "style", "refactor", "revert"] {
            assert!(config.find_type(name).is_some(), "missing type {name}");
        }
        assert_eq!(config.types[0].name, "feat");
        assert_eq!(config.max_subject_length, 100);
        assert!(!config.use_emoji);
    }

    #[test]
    fn test_find_type_unknown() {
        assert!(Config::default().find_type("feature").is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"useEmoji": true, "maxSubjectLength": 50}"#).unwrap();
        assert!(config.use_emoji);
        assert_eq!(config.max_subject_length, 50);
        assert_eq!(config.max_body_line_length, 100);
        assert_eq!(config.types.len(), 11);
    }

    #[test]
    fn test_load_from_first_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken.json");
        let valid = temp_dir.path().join("valid.json");
        let missing = temp_dir.path().join("missing.json");
        fs::write(&broken, "{ not json").unwrap();
        fs::write(
            &valid,
            r#"{
                "types": [{"type": "custom", "description": "Custom type", "emoji": "🔥"}],
                "skipBody": true
            }"#,
        )
        .unwrap();

        let config = Config::load_from(&[missing, broken, valid]);
        assert_eq!(config.types.len(), 1);
        assert_eq!(config.types[0].name, "custom");
        assert_eq!(config.types[0].emoji, "🔥");
        assert!(config.skip_body);
        assert!(!config.skip_scope);
    }

    #[test]
    fn test_empty_types_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"types": [], "strictSubject": true}"#).unwrap();

        let config = Config::load_from(&[path]);
        assert!(config.strict_subject);
        assert!(config.find_type("feat").is_some());
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&[temp_dir.path().join("nope.json")]);
        assert_eq!(config.types.len(), 11);
    }
}
