use super::LanguageLocale;
use crate::{pluralize, Language};
use dunning_common::FailedPaymentData;
use fluent::FluentArgs;

const YOUR: &str = "Ihre";
const SUBSCRIPTION: &str = "abonnement";

/// German provider.
#[derive(Debug, Clone, Copy)]
pub struct DeLocale;

impl LanguageLocale for DeLocale {
    const LANGUAGE: Language = Language::De;

    fn possessive(data: &FailedPaymentData) -> String {
        pluralize(YOUR, data.total_quantity(), Self::LANGUAGE)
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

#[cfg(test)]
mod tests {
    use crate::locale::LocaleContent;
    use dunning_common::test_utils::payment_fixtures;
    use dunning_common::BillingPeriod;

    use super::DeLocale;

    #[test]
    fn test_personal_fragments() {
        let content = LocaleContent::compose::<DeLocale>(&payment_fixtures::personal_record()).unwrap();

        assert_eq!(
            content.unfortunately,
            "Leider konnten wir keine Mittel abschreibendeine Karte für Ihre"
        );
        assert_eq!(content.personal_customer, " annual abonnement für AppCode.");
        assert_eq!(
            content.to_ensure,
            "Um einen ununterbrochenen Zugriff auf zu gewährleisten Ihre abonnement, bitte folgen Sie dem Link und aktualisiere deine abonnement"
        );
        assert_eq!(content.href_sentence, "manuell");
        assert_eq!(content.till, " Vor März 05, 2025");
    }

    #[test]
    fn test_organization_fragments() {
        let mut data = payment_fixtures::organization_record();
        data.subscription_pack.billing_period = BillingPeriod::Annual;
        data.subscription_pack.sub_pack_ref = None;

        let content = LocaleContent::compose::<DeLocale>(&data).unwrap();

        assert_eq!(content.unfortunately, "Leider konnten wir keine Mittel abschreibenVisa **** 4242 für Ihres");
        // The annual period noun is kept exactly as written in the catalog.
        assert_eq!(
            content.organization_customer,
            " abonnements als Teil eines Abonnement-Pakets für die nächsten \u{43e}ahr: "
        );
    }

    #[test]
    fn test_paypal_intro_keeps_trailing_space() {
        let content = LocaleContent::compose::<DeLocale>(&payment_fixtures::personal_record()).unwrap();

        assert!(content.paypal_card_reasons[0].ends_with("Kartenzahlungen: "));
    }
}
