//! Per-language Fluent catalogs and message formatting

use crate::error::{I18nError, I18nResult};
use crate::Language;
use fluent::{FluentArgs, FluentBundle, FluentResource};
use tracing::{debug, warn};

const EN_CATALOG: &str = include_str!("../locales/en/failed-payment.ftl");
const RU_CATALOG: &str = include_str!("../locales/ru/failed-payment.ftl");
const DE_CATALOG: &str = include_str!("../locales/de/failed-payment.ftl");

/// Embedded Fluent source for a language
pub const fn catalog_source(language: Language) -> &'static str {
    match language {
        Language::En => EN_CATALOG,
        Language::Ru => RU_CATALOG,
        Language::De => DE_CATALOG,
    }
}

/// Message bundle for one language.
///
/// Built fresh for every render; nothing is shared between renders.
pub struct Catalog {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("language", &self.language)
            .field("bundle", &"FluentBundle<FluentResource>")
            .finish()
    }
}

impl Catalog {
    /// Parse the embedded catalog for `language` into a bundle
    pub fn load(language: Language) -> I18nResult<Self> {
        let resource = FluentResource::try_new(catalog_source(language).to_string()).map_err(
            |(_, errors)| I18nError::FluentParseError {
                locale: language.code().to_string(),
                errors: errors.into_iter().map(|e| format!("{e:?}")).collect(),
            },
        )?;

        let mut bundle = FluentBundle::new(vec![language.to_language_identifier()?]);
        // Isolation marks would leak into the email text.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::BundleCreationError {
                locale: language.code().to_string(),
                errors: errors.into_iter().map(|e| format!("{e:?}")).collect(),
            })?;

        debug!("Loaded catalog for language: {}", language);
        Ok(Self { language, bundle })
    }

    /// Language of this catalog
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Check if a message exists in the catalog
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message that takes no arguments
    pub fn message(&self, id: &str) -> I18nResult<String> {
        self.format(id, None)
    }

    /// Format several argument-free messages, keeping their order
    pub fn messages(&self, ids: &[&str]) -> I18nResult<Vec<String>> {
        ids.iter().map(|id| self.message(id)).collect()
    }

    /// Format a message with the given arguments
    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> I18nResult<String> {
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|message| message.value())
            .ok_or_else(|| I18nError::MessageNotFound { key: id.to_string() })?;

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let errors: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            warn!(
                "Formatting errors for message '{}' in {}: {:?}",
                id, self.language, errors
            );
            return Err(I18nError::MessageFormatError {
                key: id.to_string(),
                errors,
            });
        }

        Ok(formatted.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_loads() {
        for language in Language::all() {
            let catalog = Catalog::load(language).unwrap();
            assert_eq!(catalog.language(), language);
            assert!(catalog.has_message("greeting"));
        }
    }

    #[test]
    fn test_missing_message() {
        let catalog = Catalog::load(Language::En).unwrap();
        let err = catalog.message("no-such-message").unwrap_err();
        assert!(matches!(err, I18nError::MessageNotFound { ref key } if key == "no-such-message"));
    }

    #[test]
    fn test_missing_argument_is_reported() {
        let catalog = Catalog::load(Language::En).unwrap();
        let err = catalog.message("till").unwrap_err();
        assert!(matches!(err, I18nError::MessageFormatError { ref key, .. } if key == "till"));
    }

    #[test]
    fn test_arguments_are_not_isolated() {
        let catalog = Catalog::load(Language::En).unwrap();
        let mut args = FluentArgs::new();
        args.set("deadline", "Mar 05, 2025");

        let till = catalog.format("till", Some(&args)).unwrap();
        assert_eq!(till, " till Mar 05, 2025");
    }

    #[test]
    fn test_messages_keep_order() {
        let catalog = Catalog::load(Language::De).unwrap();
        let months = catalog.messages(&["month-3", "month-9"]).unwrap();
        assert_eq!(months, vec!["März".to_string(), "Sept.".to_string()]);
    }
}
