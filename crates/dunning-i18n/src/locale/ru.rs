use super::LanguageLocale;
use crate::{pluralize, Language};
use dunning_common::FailedPaymentData;
use fluent::FluentArgs;

/// "your", accusative feminine.
const YOUR_ACCUSATIVE: &str = "вашу";
/// "your", dative feminine.
const YOUR_DATIVE: &str = "вашей";
/// "one's own", accusative feminine.
const OWN_ACCUSATIVE: &str = "свою";
/// "subscription", accusative.
const SUBSCRIPTION_ACCUSATIVE: &str = "подписку";
/// "subscription", dative.
const SUBSCRIPTION_DATIVE: &str = "подписке";

/// Russian provider.
#[derive(Debug, Clone, Copy)]
pub struct RuLocale;

impl LanguageLocale for RuLocale {
    const LANGUAGE: Language = Language::Ru;

    fn possessive(data: &FailedPaymentData) -> String {
        pluralize(YOUR_ACCUSATIVE, data.total_quantity(), Self::LANGUAGE)
    }

    fn organization_subscriptions(data: &FailedPaymentData) -> String {
        pluralize(SUBSCRIPTION_ACCUSATIVE, data.total_quantity(), Self::LANGUAGE)
    }

    fn to_ensure_args(data: &FailedPaymentData) -> FluentArgs<'static> {
        let licenses = data.total_licenses();

        let mut args = FluentArgs::new();
        args.set("possessive", pluralize(YOUR_DATIVE, licenses, Self::LANGUAGE));
        args.set(
            "subscriptions_dative",
            pluralize(SUBSCRIPTION_DATIVE, licenses, Self::LANGUAGE),
        );
        args.set("own", pluralize(OWN_ACCUSATIVE, licenses, Self::LANGUAGE));
        args.set(
            "subscriptions",
            pluralize(SUBSCRIPTION_ACCUSATIVE, licenses, Self::LANGUAGE),
        );
        args
    }
}
