//! Failed-payment record and the enums that steer its wording.

use crate::error::{DunningError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of account that owns the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    /// An individual buyer.
    Personal,
    /// A company or team account.
    Organization,
}

/// Payment instrument that was charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardProvider {
    /// A credit or debit card charged directly.
    CreditCard,
    /// A card charged through a PayPal account.
    PayPal,
}

/// Renewal cadence of a subscription pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    /// Renews every month.
    Monthly,
    /// Renews every year.
    Annual,
    /// Any other cadence.
    Other,
}

impl BillingPeriod {
    /// Upper-case name of the period, as it appears in serialized records.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::Annual => "ANNUAL",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single purchased product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Number of licenses bought on this line.
    pub quantity: u32,
    /// Short product name, e.g. `AppCode`.
    pub product_name: String,
    /// Longer line description used in organization listings.
    pub description: String,
}

impl LineItem {
    /// Creates a line item whose description equals its product name.
    pub fn new(quantity: u32, product_name: impl Into<String>) -> Self {
        let product_name = product_name.into();
        Self {
            quantity,
            description: product_name.clone(),
            product_name,
        }
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A bundle of licenses sharing one billing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPack {
    /// How often the pack renews.
    pub billing_period: BillingPeriod,
    /// Licenses covered by the pack.
    pub total_licenses: u32,
    /// Optional pack reference shown as `#<ref>`.
    #[serde(default)]
    pub sub_pack_ref: Option<String>,
}

/// Everything the email needs to describe a failed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedPaymentData {
    /// Account type of the payer.
    pub customer_type: CustomerType,
    /// Instrument that was declined.
    pub card_provider: CardProvider,
    /// Display string for the card, e.g. a masked number.
    #[serde(default)]
    pub card_details: Option<String>,
    /// Purchased lines, in display order.
    pub items: Vec<LineItem>,
    /// Subscription pack the items belong to.
    pub subscription_pack: SubscriptionPack,
    /// Last day to renew before access is lost.
    pub payment_deadline: NaiveDate,
}

impl FailedPaymentData {
    /// Parses a record from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON record from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks the preconditions every render relies on.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(DunningError::EmptyItems);
        }

        if let Some((index, item)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.quantity == 0)
        {
            return Err(DunningError::InvalidQuantity {
                index,
                quantity: item.quantity,
            });
        }

        if self.subscription_pack.total_licenses == 0 {
            return Err(DunningError::InvalidLicenseCount(
                self.subscription_pack.total_licenses,
            ));
        }

        Ok(())
    }

    /// Whether the payer is a personal customer.
    pub fn is_personal(&self) -> bool {
        self.customer_type == CustomerType::Personal
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    /// Licenses in the subscription pack, as a pluralization count.
    pub fn total_licenses(&self) -> i64 {
        i64::from(self.subscription_pack.total_licenses)
    }

    /// Product names joined with `", "`.
    pub fn product_names(&self) -> String {
        self.items
            .iter()
            .map(|item| item.product_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Pack reference rendered as `#<ref>`, if any.
    pub fn pack_reference(&self) -> Option<String> {
        self.subscription_pack
            .sub_pack_ref
            .as_deref()
            .map(|reference| format!("#{reference}"))
    }
}


#[cfg(test)]
mod deserialization_tests {
    use super::*;
    use crate::test_utils::payment_fixtures;
    use std::io::Write;

    #[test]
    fn test_record_parses_from_camel_case_json() {
        let data = FailedPaymentData::from_json_str(payment_fixtures::personal_record_json()).unwrap();

        assert_eq!(data, payment_fixtures::personal_record());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let data = FailedPaymentData::from_json_str(payment_fixtures::personal_record_json()).unwrap();

        assert!(data.card_details.is_none());
        assert!(data.subscription_pack.sub_pack_ref.is_none());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&CardProvider::PayPal).unwrap(), "\"PAY_PAL\"");
        assert_eq!(serde_json::to_string(&CardProvider::CreditCard).unwrap(), "\"CREDIT_CARD\"");
        assert_eq!(serde_json::to_string(&CustomerType::Organization).unwrap(), "\"ORGANIZATION\"");

        let period: BillingPeriod = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(period, BillingPeriod::Monthly);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let json = payment_fixtures::personal_record_json().replace("CREDIT_CARD", "BANK_TRANSFER");

        let result = FailedPaymentData::from_json_str(&json);
        assert!(matches!(result, Err(DunningError::Serialization(_))));
    }

    #[test]
    fn test_record_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(payment_fixtures::personal_record_json().as_bytes()).unwrap();

        let data = FailedPaymentData::from_json_file(file.path()).unwrap();
        assert_eq!(data.items[0].product_name, "AppCode");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FailedPaymentData::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(DunningError::Io(_))));
    }
}
