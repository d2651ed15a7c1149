//! Renderer trait for turning an email body into a concrete format.

use crate::body::EmailBody;
use crate::error::MailResult;

/// Turns an [`EmailBody`] into text in some output format.
pub trait BodyRenderer: Send + Sync {
    /// Renders the body.
    fn render(&self, body: &EmailBody) -> MailResult<String>;

    /// Gets the name of this output format.
    fn name(&self) -> &'static str;

    /// Gets the MIME type of the rendered output.
    fn content_type(&self) -> &'static str;
}
