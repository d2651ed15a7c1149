use super::LanguageLocale;
use crate::{pluralize, Language};
use dunning_common::FailedPaymentData;
use fluent::FluentArgs;

const SUBSCRIPTION: &str = "subscription";

/// English provider.
#[derive(Debug, Clone, Copy)]
pub struct EnLocale;

impl LanguageLocale for EnLocale {
    const LANGUAGE: Language = Language::En;

    // Unlike Russian and German, the possessive is never inflected here.
    fn possessive(_data: &FailedPaymentData) -> String {
        "your".to_string()
    }

    fn organization_subscriptions(data: &FailedPaymentData) -> String {
        pluralize(SUBSCRIPTION, data.total_quantity(), Self::LANGUAGE)
    }

    fn to_ensure_args(data: &FailedPaymentData) -> FluentArgs<'static> {
        let mut args = FluentArgs::new();
        args.set(
            "subscriptions",
            pluralize(SUBSCRIPTION, data.total_licenses(), Self::LANGUAGE),
        );
        args
    }
}
