//! Error types for payment record handling.

use thiserror::Error;

/// Result type alias for dunning-common operations.
pub type Result<T> = std::result::Result<T, DunningError>;

/// Errors raised while loading or checking a failed-payment record.
#[derive(Error, Debug)]
pub enum DunningError {
    /// The record carries no line items.
    #[error("Invalid payment record: no line items")]
    EmptyItems,

    /// A line item has a quantity below one.
    #[error("Invalid payment record: item {index} has quantity {quantity}, expected at least 1")]
    InvalidQuantity {
        /// Position of the offending item.
        index: usize,
        /// The quantity found.
        quantity: u32,
    },

    /// The subscription pack declares fewer than one license.
    #[error("Invalid payment record: subscription pack has {0} licenses, expected at least 1")]
    InvalidLicenseCount(u32),

    /// I/O error while reading a record.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DunningError {
    /// Whether the error is a precondition violation on the record itself,
    /// as opposed to a failure to obtain it.
    pub const fn is_invalid_record(&self) -> bool {
        matches!(
            self,
            Self::EmptyItems | Self::InvalidQuantity { .. } | Self::InvalidLicenseCount(_)
        )
    }
}
