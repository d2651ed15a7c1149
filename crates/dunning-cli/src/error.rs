//! Application-wide error types using thiserror.

use dunning_common::DunningError;
use dunning_config::ConfigError;
use dunning_mail::MailError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The payment record could not be read.
    #[error("Payment record error: {0}")]
    Data(#[from] DunningError),

    /// Assembly or rendering failed.
    #[error("Rendering error: {0}")]
    Mail(#[from] MailError),

    /// The language code given on the command line is not supported.
    #[error("Language error: {0}")]
    Language(#[from] dunning_i18n::I18nError),

    /// Neither the command line nor the configuration names a language.
    #[error("No language given: pass --language or set mail.language / DUNNING_LANGUAGE")]
    MissingLanguage,
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
