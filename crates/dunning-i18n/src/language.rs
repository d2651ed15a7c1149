//! Supported languages and their identifiers

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Languages an email can be rendered in.
///
/// There is deliberately no `Default`: a caller must always say which
/// language it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// English
    En,
    /// Russian
    Ru,
    /// German
    De,
}

impl Language {
    /// Get the full language tag for this language
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ru => "ru-RU",
            Self::De => "de-DE",
        }
    }

    /// Get the short language code, which also names the catalog directory
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::De => "de",
        }
    }

    /// Parse a language from a code such as `ru` or `de-DE`, ignoring case
    pub fn from_code(code: &str) -> I18nResult<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Self::En),
            "ru" | "ru-ru" => Ok(Self::Ru),
            "de" | "de-de" => Ok(Self::De),
            _ => Err(I18nError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Convert to Fluent `LanguageIdentifier`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported languages
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Ru, Self::De]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.short_code()
    }
}
