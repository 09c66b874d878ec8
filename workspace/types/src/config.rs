use log::warn;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    cmp::Ordering,
    env, fs,
    io::{self, ErrorKind},
    marker::PhantomData,
    path::PathBuf,
};
use thiserror::Error;

use crate::utils::expand_path;

/// Represents the raw configuration file content
#[derive(Debug, Clone)]
pub struct ConfigFile<T> {
    content: Cow<'static, str>,
    _marker: PhantomData<T>,
    pub path: PathBuf,
}
impl<T> AsRef<str> for ConfigFile<T> {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Errors that can occur during configuration handling
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error parsing TOML content
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Error rendering TOML content
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Version parsing error
    #[error("Version parsing error: {0}")]
    VersionParse(#[from] semver::Error),

    /// Definition requires a newer tool
    #[error("{0}")]
    IncompatibleVersion(String),
}

pub trait ConfigType {
    fn default_config_path() -> &'static str;
}

impl<T: ConfigType> ConfigFile<T> {
    /// Loads configuration from the specified location or the current directory
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to configuration file or directory
    ///
    /// # Returns
    ///
    /// * `Result<ConfigFile<T>, ConfigError>` - The loaded configuration or an error
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let path = Self::resolve_config_path(config_path)?;
        let content = fs::read_to_string(&path).map_err(ConfigError::Io)?;
        Ok(ConfigFile {
            content: Cow::Owned(content),
            _marker: PhantomData,
            path,
        })
    }

    /// Resolves the configuration file path
    fn resolve_config_path(config_path: Option<String>) -> Result<PathBuf, ConfigError> {
        let path = match config_path {
            Some(location) => {
                let path = expand_path(&PathBuf::from(location), None);
                if path.is_dir() {
                    path.join(T::default_config_path())
                } else {
                    path
                }
            }
            None => env::current_dir()
                .map_err(ConfigError::Io)?
                .join(T::default_config_path()),
        };

        if !path.exists() {
            return Err(ConfigError::Io(io::Error::new(
                ErrorKind::NotFound,
                format!("Path does not exist: {}", path.display()),
            )));
        }

        Ok(path)
    }

    /// Parses the configuration content into the generic type T
    pub fn parse(self) -> Result<T, ConfigError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        toml::from_str::<T>(&self.content).map_err(ConfigError::from)
    }

    /// Convenience method to load and parse in one operation
    pub fn load_and_parse(config_path: Option<String>) -> Result<T, ConfigError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        Self::load(config_path)?.parse()
    }
}

/// `[fleet]` header of a fleet definition file
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct FleetHeader {
    /// Minimum fleet-builder version able to read the definition
    pub builder_version: Version,
}

impl FleetHeader {
    /// Checks the required version against the running tool
    ///
    /// # Arguments
    ///
    /// * `current_version` - version of the running fleet-builder
    ///
    /// # Returns
    ///
    /// * `Result<FleetHeader, ConfigError>` - The validated header or an error
    pub fn validate_and_apply_defaults(self, current_version: &str) -> Result<Self, ConfigError> {
        let current_version = Version::parse(current_version).map_err(ConfigError::VersionParse)?;

        let required_version = &self.builder_version;

        match required_version.cmp(&current_version) {
            Ordering::Greater => {
                return Err(ConfigError::IncompatibleVersion(format!(
                    "Required fleet-builder version {} is higher than current version {}",
                    required_version, current_version
                )));
            }
            Ordering::Less => {
                warn!(
                    "Required fleet-builder version {} is lower than current version {}. Newer profile fields fall back to defaults.",
                    required_version, current_version
                );
            }
            Ordering::Equal => {}
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defaults::CONFIG_FILE_NAME;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct HeaderOnly {
        fleet: FleetHeader,
    }
    impl ConfigType for HeaderOnly {
        fn default_config_path() -> &'static str {
            CONFIG_FILE_NAME
        }
    }

    fn write_header(dir: &std::path::Path, version: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let mut file = File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
            [fleet]
            builder_version = "{}"
        "#,
            version
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_config_file_load_from_directory() {
        let dir = tempdir().unwrap();
        write_header(dir.path(), "0.1.0");

        let config_file =
            ConfigFile::<HeaderOnly>::load(Some(dir.path().to_string_lossy().to_string())).unwrap();
        assert!(config_file.as_ref().contains("builder_version"));
        assert!(config_file.path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_config_file_parse() {
        let dir = tempdir().unwrap();
        let path = write_header(dir.path(), "1.2.3");

        let config =
            ConfigFile::<HeaderOnly>::load_and_parse(Some(path.to_string_lossy().to_string()))
                .unwrap();
        assert_eq!(config.fleet.builder_version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = ConfigFile::<HeaderOnly>::load(Some(missing.to_string_lossy().to_string()));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_newer_required_version_is_rejected() {
        let header = FleetHeader {
            builder_version: Version::new(9, 0, 0),
        };
        let result = header.validate_and_apply_defaults("0.1.0");
        assert!(matches!(result, Err(ConfigError::IncompatibleVersion(_))));
    }

    #[test]
    fn test_older_required_version_is_accepted() {
        let header = FleetHeader {
            builder_version: Version::new(0, 1, 0),
        };
        assert!(header.validate_and_apply_defaults("0.2.0").is_ok());
    }
}
