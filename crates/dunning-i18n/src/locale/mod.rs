//! Locale content providers
//!
//! Every supported language has a provider that knows which of its words
//! inflect with which count. [`LocaleContent::compose`] runs a provider
//! against its Fluent catalog and produces every text fragment the email
//! body needs, eagerly, from a single payment record.

mod de;
mod en;
mod ru;

pub use de::DeLocale;
pub use en::EnLocale;
pub use ru::RuLocale;

use crate::catalog::Catalog;
use crate::dates::format_deadline;
use crate::error::I18nResult;
use crate::Language;
use dunning_common::{BillingPeriod, FailedPaymentData};
use fluent::FluentArgs;
use serde::Serialize;
use tracing::debug;

/// Message ids of the credit card reasons, introduction first.
const CREDIT_CARD_REASON_KEYS: [&str; 4] = [
    "credit-card-reasons-intro",
    "credit-card-reason-expired",
    "credit-card-reason-funds",
    "credit-card-reason-international",
];

/// Message ids of the PayPal reasons, introduction first.
const PAYPAL_REASON_KEYS: [&str; 5] = [
    "paypal-reasons-intro",
    "paypal-reason-unconfirmed",
    "paypal-reason-details",
    "paypal-reason-expired",
    "paypal-reason-funds",
];

/// Language-specific inflection choices.
///
/// Fixed sentences live in the catalogs; a provider only decides which
/// words get pluralized, and by which count.
pub trait LanguageLocale {
    /// Language whose catalog the provider fills in.
    const LANGUAGE: Language;

    /// Possessive closing the "could not charge" sentence.
    fn possessive(data: &FailedPaymentData) -> String;

    /// Subscription noun opening the organization sentence.
    fn organization_subscriptions(data: &FailedPaymentData) -> String;

    /// Arguments of the renewal call-to-action.
    fn to_ensure_args(data: &FailedPaymentData) -> FluentArgs<'static>;
}

/// Every localized fragment of a failed-payment email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleContent {
    /// Language the fragments are written in.
    pub language: Language,
    /// Thank-you sentence.
    pub greeting: String,
    /// "We could not charge ... for your" lead-in.
    pub unfortunately: String,
    /// Continuation for personal customers.
    pub personal_customer: String,
    /// Continuation for organizations, before the item listing.
    pub organization_customer: String,
    /// Introduction followed by credit card decline reasons.
    pub credit_card_reasons: Vec<String>,
    /// Introduction followed by PayPal decline reasons.
    pub paypal_card_reasons: Vec<String>,
    /// Renewal call-to-action preceding the link.
    pub to_ensure: String,
    /// Link text.
    pub href_sentence: String,
    /// Deadline clause following the link.
    pub till: String,
    /// Closing retry suggestion.
    pub double_check: String,
}

impl LocaleContent {
    /// Build all fragments for `data` with provider `L`.
    pub fn compose<L: LanguageLocale>(data: &FailedPaymentData) -> I18nResult<Self> {
        let catalog = Catalog::load(L::LANGUAGE)?;

        let card = match &data.card_details {
            Some(details) => details.clone(),
            None => catalog.message("card-fallback")?,
        };
        let mut args = FluentArgs::new();
        args.set("card", card);
        args.set("possessive", L::possessive(data));
        let unfortunately = catalog.format("unfortunately", Some(&args))?;

        let mut args = FluentArgs::new();
        args.set("period", data.subscription_pack.billing_period.name().to_lowercase());
        args.set("products", data.product_names());
        let personal_customer = catalog.format("personal-customer", Some(&args))?;

        let mut args = FluentArgs::new();
        args.set("subscriptions", L::organization_subscriptions(data));
        args.set(
            "pack_ref",
            data.pack_reference()
                .map(|reference| format!(" {reference}"))
                .unwrap_or_default(),
        );
        args.set(
            "period_noun",
            catalog.message(period_noun_key(data.subscription_pack.billing_period))?,
        );
        let organization_customer = catalog.format("organization-customer", Some(&args))?;

        let to_ensure = catalog.format("to-ensure", Some(&L::to_ensure_args(data)))?;

        let mut args = FluentArgs::new();
        args.set("deadline", format_deadline(&catalog, data.payment_deadline)?);
        let till = catalog.format("till", Some(&args))?;

        Ok(Self {
            language: L::LANGUAGE,
            greeting: catalog.message("greeting")?,
            unfortunately,
            personal_customer,
            organization_customer,
            credit_card_reasons: catalog.messages(&CREDIT_CARD_REASON_KEYS)?,
            paypal_card_reasons: catalog.messages(&PAYPAL_REASON_KEYS)?,
            to_ensure,
            href_sentence: catalog.message("href-sentence")?,
            till,
            double_check: catalog.message("double-check")?,
        })
    }
}

const fn period_noun_key(period: BillingPeriod) -> &'static str {
    match period {
        BillingPeriod::Monthly => "period-monthly",
        BillingPeriod::Annual => "period-annual",
        BillingPeriod::Other => "period-other",
    }
}

/// Validate `data` and build its content in `language`.
pub fn choose_locale(language: Language, data: &FailedPaymentData) -> I18nResult<LocaleContent> {
    data.validate()?;

    debug!(
        language = %language,
        customer_type = ?data.customer_type,
        items = data.items.len(),
        "Composing locale content"
    );

    match language {
        Language::En => LocaleContent::compose::<EnLocale>(data),
        Language::Ru => LocaleContent::compose::<RuLocale>(data),
        Language::De => LocaleContent::compose::<DeLocale>(data),
    }
}
