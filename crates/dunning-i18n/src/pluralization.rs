//! Pluralization of the fixed vocabulary used in the email
//!
//! This is syntactic string surgery, not grammatical analysis: the locale
//! providers only ever feed it a handful of known words per language.

use crate::Language;

/// Russian singular forms whose plural does not follow the suffix rule.
const RU_IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("вашу", "ваши"),
    ("вашей", "вашим"),
    ("подписке", "подпискам"),
];

/// Inflect `word` for `count` in `language`.
///
/// A count of exactly one returns the word unchanged; any other count,
/// including zero and negative counts, selects the plural.
pub fn pluralize(word: &str, count: i64, language: Language) -> String {
    if count == 1 {
        return word.to_string();
    }

    match language {
        Language::En | Language::De => format!("{word}s"),
        Language::Ru => russian_plural(word),
    }
}

/// Table lookup, falling back to replacing the last letter with `и`.
fn russian_plural(word: &str) -> String {
    if let Some((_, plural)) = RU_IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == word)
    {
        return (*plural).to_string();
    }

    let mut chars = word.chars();
    chars.next_back();
    format!("{}и", chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_is_identity() {
        for language in Language::all() {
            assert_eq!(pluralize("subscription", 1, language), "subscription");
        }
    }

    #[test]
    fn test_suffix_languages() {
        assert_eq!(pluralize("subscription", 2, Language::En), "subscriptions");
        assert_eq!(pluralize("abonnement", 7, Language::De), "abonnements");
        assert_eq!(pluralize("Ihre", 3, Language::De), "Ihres");
    }

    #[test]
    fn test_russian_table() {
        assert_eq!(pluralize("вашу", 2, Language::Ru), "ваши");
        assert_eq!(pluralize("вашей", 3, Language::Ru), "вашим");
        assert_eq!(pluralize("подписке", 5, Language::Ru), "подпискам");
    }

    #[test]
    fn test_russian_fallback_replaces_last_letter() {
        assert_eq!(pluralize("карточка", 2, Language::Ru), "карточки");
        assert_eq!(pluralize("подписку", 4, Language::Ru), "подписки");
        assert_eq!(pluralize("свою", 10, Language::Ru), "свои");
    }

    #[test]
    fn test_non_positive_counts_are_plural() {
        assert_eq!(pluralize("subscription", 0, Language::En), "subscriptions");
        assert_eq!(pluralize("subscription", -1, Language::En), "subscriptions");
        assert_eq!(pluralize("вашу", 0, Language::Ru), "ваши");
    }

    #[test]
    fn test_empty_russian_word() {
        assert_eq!(pluralize("", 2, Language::Ru), "и");
    }
}
