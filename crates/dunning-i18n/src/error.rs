//! Error types for localization operations

use dunning_common::DunningError;
use thiserror::Error;

/// Errors that can occur while producing localized content
#[derive(Error, Debug)]
pub enum I18nError {
    /// The language code names no supported language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError {
        /// Language whose catalog failed to parse.
        locale: String,
        /// Parser diagnostics.
        errors: Vec<String>,
    },

    /// Bundle creation failed
    #[error("Failed to create bundle for locale {locale}: {errors:?}")]
    BundleCreationError {
        /// Language whose bundle was rejected.
        locale: String,
        /// Bundle diagnostics.
        errors: Vec<String>,
    },

    /// Message not found in the catalog
    #[error("Message not found: {key}")]
    MessageNotFound {
        /// Missing message id.
        key: String,
    },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError {
        /// Message id.
        key: String,
        /// Resolver diagnostics.
        errors: Vec<String>,
    },

    /// The payment record violates a precondition
    #[error(transparent)]
    InvalidData(#[from] DunningError),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
