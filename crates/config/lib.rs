use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the working directory.
pub const DEFAULT_FILE: &str = ".repo-dive.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {0}: {1}")]
    Io(String, #[source] io::Error),
    #[error("invalid config {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    /// CSV file with the repository dataset; unset means the loader's default.
    pub source: Option<String>,
    /// Languages selected when the session starts; empty selects all.
    pub languages: Vec<String>,
    pub analysis: Analysis,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Analysis {
    pub default_question: Option<String>,
    /// Ask questions of the language-filtered table instead of the full one.
    pub apply_language_filter: bool,
}

impl Config {
    pub fn new(filename: &str) -> Result<Config, ConfigError> {
        let reader = File::open(filename).map_err(|e| ConfigError::Io(filename.into(), e))?;
        let config: Config =
            serde_yaml::from_reader(reader).map_err(|e| ConfigError::Yaml(filename.into(), e))?;
        Ok(config)
    }

    /// Like [`Config::new`], but a missing file means defaults.
    pub fn load_or_default(filename: &str) -> Result<Config, ConfigError> {
        if !Path::new(filename).exists() {
            info!("no config at {}, using defaults", filename);
            return Ok(Config::default());
        }
        Config::new(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config() {
        let content = r##"source: data/repos.csv
languages: [Rust, Go]
analysis:
  default_question: monthly-trend
  apply_language_filter: true
"##;
        let config: Config = serde_yaml::from_str(content).unwrap();
        assert_eq!(config.source.as_deref(), Some("data/repos.csv"));
        assert_eq!(config.languages, &["Rust", "Go"]);
        assert_eq!(
            config.analysis.default_question.as_deref(),
            Some("monthly-trend")
        );
        assert!(config.analysis.apply_language_filter);
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_yaml::from_str("languages: []").unwrap();
        assert!(config.source.is_none());
        assert!(config.languages.is_empty());
        assert!(config.analysis.default_question.is_none());
        assert!(!config.analysis.apply_language_filter);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_or_default("no/such/.repo-dive.yml").unwrap();
        assert!(config.source.is_none());
        assert!(Config::new("no/such/.repo-dive.yml").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"languages: {not: [a list").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::Yaml(..))
        ));
    }
}
