//! Property tests for the pluralizer

use dunning_i18n::{pluralize, Language};
use proptest::prelude::*;

fn any_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Ru), Just(Language::De)]
}

fn plural_count() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("count must not be one", |count| *count != 1)
}

proptest! {
    #[test]
    fn singular_is_identity(word in "\\PC{0,24}", language in any_language()) {
        prop_assert_eq!(pluralize(&word, 1, language), word);
    }

    #[test]
    fn english_and_german_append_s(
        word in "[A-Za-zÄÖÜäöüß ]{0,24}",
        count in plural_count(),
        language in prop_oneof![Just(Language::En), Just(Language::De)],
    ) {
        prop_assert_eq!(pluralize(&word, count, language), format!("{word}s"));
    }

    #[test]
    fn russian_fallback_replaces_last_letter(
        stem in "[а-я]{1,12}",
        last in "[а-я]",
        count in plural_count(),
    ) {
        let word = format!("{stem}{last}");
        prop_assume!(!["вашу", "вашей", "подписке"].contains(&word.as_str()));

        prop_assert_eq!(pluralize(&word, count, Language::Ru), format!("{stem}и"));
    }
}

#[test]
fn russian_lexicon() {
    assert_eq!(pluralize("вашу", 2, Language::Ru), "ваши");
    assert_eq!(pluralize("вашей", 3, Language::Ru), "вашим");
    assert_eq!(pluralize("подписке", 5, Language::Ru), "подпискам");
    assert_eq!(pluralize("карточка", 2, Language::Ru), "карточки");
}
