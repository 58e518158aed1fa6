use crate::error::{Result, SpellcheckError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub dictionary: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub max_suggestions: usize,
    pub parallel: bool,
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            dictionary: None,
            personal_dictionary: None,
            max_suggestions: default_max_suggestions(),
            parallel: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        language: Option<String>,
        dictionary: Option<PathBuf>,
        personal_dict: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Reading global config {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellcheck.toml");
        if local_path.exists() {
            log::debug!("Reading local config {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        // Apply CLI overrides
        if let Some(language) = language {
            config.language = language;
        }
        if let Some(dict) = dictionary {
            config.dictionary = Some(dict);
        }
        if let Some(dict) = personal_dict {
            config.personal_dictionary = Some(dict);
        }

        // Fall back to the per-user personal dictionary if there is one
        if config.personal_dictionary.is_none() {
            config.personal_dictionary =
                Self::default_personal_dict_path().filter(|path| path.exists());
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SpellcheckError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| SpellcheckError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        if !other.parallel {
            self.parallel = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcheck").map(|dirs| dirs.config_dir().join("personal.txt"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcheck").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, "en_US");
        assert_eq!(config.max_suggestions, 5);
        assert!(config.parallel);
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            language: "en_GB".to_string(),
            parallel: false,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.language, "en_GB");
        assert!(!merged.parallel);
        assert_eq!(merged.max_suggestions, 5);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("max_suggestions = 3\ndictionary = \"words.txt\"\n").unwrap();
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.dictionary, Some(PathBuf::from("words.txt")));
        assert_eq!(config.language, "en_US");
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, SpellcheckError::ReadConfig { .. }));

        fs::write(&path, "max_suggestions = \"many\"").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, SpellcheckError::ParseConfig { .. }));
    }
}
