//! # Dunning CLI
//!
//! Command line front end rendering the failed-payment email for a JSON
//! payment record.
//!
//! The binary loads configuration, resolves the language, assembles the
//! body and writes it to stdout as HTML, plain text or JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
