//! Default values.

use crate::schema::{Config, MailConfig};
use dunning_common::LoggingConfig;
use dunning_mail::DEFAULT_RENEWAL_URL;

impl Default for Config {
    fn default() -> Self {
        Self {
            mail: MailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// No default language: the caller has to pick one.
impl Default for MailConfig {
    fn default() -> Self {
        Self {
            renewal_url: DEFAULT_RENEWAL_URL.to_string(),
            language: None,
        }
    }
}
