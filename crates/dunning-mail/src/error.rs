//! Error types for email assembly and rendering.

use dunning_i18n::I18nError;

/// Errors raised while assembling or rendering an email body.
#[derive(thiserror::Error, Debug)]
pub enum MailError {
    /// The localized content could not be produced.
    #[error("Localization error: {0}")]
    Localization(#[from] I18nError),

    /// The renewal link target is not an absolute http or https URL.
    #[error("Invalid renewal URL '{url}': {reason}")]
    InvalidRenewalUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The block model could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mail operations.
pub type MailResult<T> = Result<T, MailError>;
