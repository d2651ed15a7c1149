//! Runtime validation of a loaded configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use dunning_mail::validate_renewal_url;
use tracing_subscriber::EnvFilter;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        validate_renewal_url(&config.mail.renewal_url)
            .map_err(|e| ConfigError::Validation(format!("mail.renewal_url: {e}")))?;
        config.language()?;

        if let Err(e) = EnvFilter::try_new(&config.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}': {e}",
                config.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let mut config = Config::default();
        config.mail.renewal_url = "renew/manually".to_string();

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("mail.renewal_url"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.mail.renewal_url = "mailto:billing@example.com".to_string();

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'mailto'"));
    }

    #[test]
    fn test_rejects_script_url() {
        let mut config = Config::default();
        config.mail.renewal_url = "javascript:alert(1)".to_string();

        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(ConfigError::Validation(message)) if message.contains("unsupported scheme 'javascript'")
        ));
    }

    #[test]
    fn test_rejects_unsupported_language() {
        let mut config = Config::default();
        config.mail.language = Some("fr".to_string());

        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(ConfigError::Validation(message)) if message.starts_with("mail.language")
        ));
    }

    #[test]
    fn test_accepts_language_variants() {
        let mut config = Config::default();
        for code in ["en", "ru-RU", "DE"] {
            config.mail.language = Some(code.to_string());
            assert!(ConfigValidator::validate(&config).is_ok(), "{code}");
        }
    }
}
