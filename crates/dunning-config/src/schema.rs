//! Configuration schema definitions using serde.

use crate::error::{ConfigError, ConfigResult};
use dunning_common::LoggingConfig;
use dunning_i18n::Language;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Email rendering configuration.
    pub mail: MailConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Email rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Absolute URL the renewal link points to.
    pub renewal_url: String,
    /// Language code used when the caller does not name one.
    pub language: Option<String>,
}

impl Config {
    /// The configured default language, if any.
    pub fn language(&self) -> ConfigResult<Option<Language>> {
        self.mail
            .language
            .as_deref()
            .map(|code| {
                Language::from_code(code)
                    .map_err(|e| ConfigError::Validation(format!("mail.language: {e}")))
            })
            .transpose()
    }
}
