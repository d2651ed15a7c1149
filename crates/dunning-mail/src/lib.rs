//! # Dunning Mail
//!
//! Assembles the body of a failed-payment email from localized content and
//! renders it.
//!
//! The body is built as a small block model ([`EmailBody`]) of paragraphs,
//! line breaks and one inline link; [`BodyRenderer`] implementations turn it
//! into HTML, plain text or JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod body;
pub mod error;
pub mod renderer;
pub mod traits;

pub use assembler::*;
pub use body::*;
pub use error::*;
pub use renderer::*;
pub use traits::*;
