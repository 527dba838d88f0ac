//! User configuration loaded from a TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Front-end settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Print the expression line above the result.
    pub show_expression: bool,
    /// Copy the result to the clipboard after every successful equals.
    pub copy_on_equals: bool,
    /// Prompt shown by the interactive loop.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_expression: true,
            copy_on_equals: false,
            prompt: "> ".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default location: `<config dir>/calcpad/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried, falling back to defaults when no file is there.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "show_expression = false\ncopy_on_equals = true\nprompt = \"calc> \"\n",
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                show_expression: false,
                copy_on_equals: true,
                prompt: "calc> ".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config("copy_on_equals = true\n");
        let config = Config::from_file(file.path()).unwrap();
        assert!(config.copy_on_equals);
        assert!(config.show_expression);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_empty_config_is_default() {
        let file = write_config("");
        assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config() {
        let file = write_config("show_expression = \"yes\"\n");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config("theme = \"dark\"\n");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::Read { .. })
        ));
    }
}
