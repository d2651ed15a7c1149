//! Test utilities and shared fixtures for the dunning workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the integration tests of downstream crates.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Ready-made payment records.
pub mod payment_fixtures {
    use crate::{
        BillingPeriod, CardProvider, CustomerType, FailedPaymentData, LineItem, SubscriptionPack,
    };
    use chrono::NaiveDate;

    /// Deadline shared by all fixtures: 5 March 2025.
    pub fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid fixture date")
    }

    /// A personal customer with a single annual AppCode license, charged by
    /// credit card with no card details on file.
    pub fn personal_record() -> FailedPaymentData {
        FailedPaymentData {
            customer_type: CustomerType::Personal,
            card_provider: CardProvider::CreditCard,
            card_details: None,
            items: vec![LineItem::new(1, "AppCode")],
            subscription_pack: SubscriptionPack {
                billing_period: BillingPeriod::Annual,
                total_licenses: 1,
                sub_pack_ref: None,
            },
            payment_deadline: deadline(),
        }
    }

    /// An organization paying monthly through PayPal for five licenses
    /// across two products, in pack `#42`.
    pub fn organization_record() -> FailedPaymentData {
        FailedPaymentData {
            customer_type: CustomerType::Organization,
            card_provider: CardProvider::PayPal,
            card_details: Some("Visa **** 4242".to_string()),
            items: vec![
                LineItem::new(3, "IntelliJ IDEA Ultimate")
                    .with_description("IntelliJ IDEA Ultimate, commercial"),
                LineItem::new(2, "PyCharm Professional")
                    .with_description("PyCharm Professional, commercial"),
            ],
            subscription_pack: SubscriptionPack {
                billing_period: BillingPeriod::Monthly,
                total_licenses: 5,
                sub_pack_ref: Some("42".to_string()),
            },
            payment_deadline: deadline(),
        }
    }

    /// JSON form of [`personal_record`].
    pub fn personal_record_json() -> &'static str {
        r#"{
  "customerType": "PERSONAL",
  "cardProvider": "CREDIT_CARD",
  "items": [
    { "quantity": 1, "productName": "AppCode", "description": "AppCode" }
  ],
  "subscriptionPack": { "billingPeriod": "ANNUAL", "totalLicenses": 1 },
  "paymentDeadline": "2025-03-05"
}"#
    }
}
