//! # Dunning I18n
//!
//! Localized text for failed-payment emails.
//!
//! This crate provides:
//!
//! - the closed set of supported [`Language`]s
//! - a [`pluralize`] function reproducing each language's inflection rule
//! - compile-time validated Fluent catalogs, one per language
//! - per-language providers turning a payment record into [`LocaleContent`]
//!
//! # Example
//!
//! ```rust
//! use dunning_common::{
//!     BillingPeriod, CardProvider, CustomerType, FailedPaymentData, LineItem, SubscriptionPack,
//! };
//! use dunning_i18n::{choose_locale, Language};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let data = FailedPaymentData {
//!     customer_type: CustomerType::Personal,
//!     card_provider: CardProvider::CreditCard,
//!     card_details: None,
//!     items: vec![LineItem::new(1, "AppCode")],
//!     subscription_pack: SubscriptionPack {
//!         billing_period: BillingPeriod::Annual,
//!         total_licenses: 1,
//!         sub_pack_ref: None,
//!     },
//!     payment_deadline: chrono::NaiveDate::from_ymd_opt(2025, 3, 5).ok_or("bad date")?,
//! };
//!
//! let content = choose_locale(Language::from_code("en")?, &data)?;
//! assert_eq!(content.personal_customer, "annual subscription to AppCode.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod dates;
pub mod error;
pub mod language;
pub mod locale;
pub mod pluralization;

pub use catalog::Catalog;
pub use error::{I18nError, I18nResult};
pub use language::Language;
pub use locale::{choose_locale, DeLocale, EnLocale, LanguageLocale, LocaleContent, RuLocale};
pub use pluralization::pluralize;
