//! # Dunning Common
//!
//! Shared types, validation, errors and logging for the dunning workspace.
//!
//! This crate provides the failed-payment record consumed by the locale
//! providers and the email body assembler, together with the precondition
//! checks every render runs before producing any text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
