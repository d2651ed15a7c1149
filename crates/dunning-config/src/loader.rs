//! Configuration loading and persistence with atomic file operations.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use crate::validator::ConfigValidator;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "DUNNING_CONFIG_PATH";
/// Overrides `mail.renewal_url`.
pub const RENEWAL_URL_ENV: &str = "DUNNING_RENEWAL_URL";
/// Overrides `mail.language`.
pub const LANGUAGE_ENV: &str = "DUNNING_LANGUAGE";
/// Overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "DUNNING_LOG_LEVEL";
/// Overrides `logging.json_format`.
pub const LOG_JSON_ENV: &str = "DUNNING_LOG_JSON";

/// File read when neither a path nor `DUNNING_CONFIG_PATH` is given.
pub const DEFAULT_CONFIG_FILE: &str = "dunning.yaml";

/// Configuration loader with atomic file operations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for `DUNNING_CONFIG_PATH`, or `dunning.yaml`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string()))
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, then applies process environment
    /// overrides and validates the result.
    ///
    /// A missing file yields the defaults.
    pub fn load(&self) -> ConfigResult<Config> {
        self.load_with_env(|var| std::env::var(var).ok())
    }

    /// Like [`ConfigLoader::load`], reading overrides through `lookup`.
    pub fn load_with_env<F>(&self, lookup: F) -> ConfigResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.read_file()?;
        apply_env_overrides(&mut config, lookup)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Saves configuration to file atomically.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        ConfigValidator::validate(config)?;
        let yaml = serde_yaml::to_string(config)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        file.write_all(yaml.as_bytes())
            .map_err(|source| self.io_error(source))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        info!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }

    fn read_file(&self) -> ConfigResult<Config> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                debug!(path = %self.path.display(), "Loading configuration file");
                if contents.trim().is_empty() {
                    return Ok(Config::default());
                }
                Ok(serde_yaml::from_str(&contents)?)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No configuration file, using defaults");
                Ok(Config::default())
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Applies `DUNNING_*` overrides found through `lookup`.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(RENEWAL_URL_ENV) {
        config.mail.renewal_url = url;
    }
    if let Some(language) = lookup(LANGUAGE_ENV) {
        config.mail.language = Some(language);
    }
    if let Some(level) = lookup(LOG_LEVEL_ENV) {
        config.logging.level = level;
    }
    if let Some(value) = lookup(LOG_JSON_ENV) {
        config.logging.json_format = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
            var: LOG_JSON_ENV,
            value,
        })?;
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
