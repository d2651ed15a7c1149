//! Assembly of the failed-payment email body.

use crate::body::{EmailBody, Paragraph};
use crate::error::{MailError, MailResult};
use crate::renderer::HtmlRenderer;
use crate::traits::BodyRenderer;
use dunning_common::{CardProvider, FailedPaymentData};
use dunning_i18n::{choose_locale, Language, LocaleContent};
use tracing::debug;
use url::Url;

/// Link target of the renewal paragraph unless configured otherwise.
pub const DEFAULT_RENEWAL_URL: &str = "https://foo.bar/ex";

/// Checks that `url` can be used as the renewal link target.
pub fn validate_renewal_url(url: &str) -> MailResult<Url> {
    let invalid = |reason: String| MailError::InvalidRenewalUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}

/// A failed-payment email for one record in one language.
///
/// The localized content is computed once, in [`FailedPaymentEmail::new`];
/// building the body afterwards only arranges it.
#[derive(Debug, Clone)]
pub struct FailedPaymentEmail<'a> {
    data: &'a FailedPaymentData,
    locale: LocaleContent,
    renewal_url: String,
}

impl<'a> FailedPaymentEmail<'a> {
    /// Validates `data` and prepares its content in `language`.
    pub fn new(data: &'a FailedPaymentData, language: Language) -> MailResult<Self> {
        Ok(Self {
            data,
            locale: choose_locale(language, data)?,
            renewal_url: DEFAULT_RENEWAL_URL.to_string(),
        })
    }

    /// Points the renewal link somewhere else.
    ///
    /// Only absolute `http` and `https` URLs are accepted.
    pub fn with_renewal_url(mut self, url: impl Into<String>) -> MailResult<Self> {
        let url = url.into();
        validate_renewal_url(&url)?;
        self.renewal_url = url;
        Ok(self)
    }

    /// The localized fragments the body is built from.
    pub const fn locale(&self) -> &LocaleContent {
        &self.locale
    }

    /// Target of the renewal link.
    pub fn renewal_url(&self) -> &str {
        &self.renewal_url
    }

    /// Arranges the fragments into paragraphs.
    pub fn build_body(&self) -> EmailBody {
        let paragraphs = vec![
            self.greeting(),
            self.problem_description(),
            self.failure_reasons(),
            self.renewal_prompt(),
            self.double_check(),
        ];

        debug!(
            language = %self.locale.language,
            card_provider = ?self.data.card_provider,
            paragraphs = paragraphs.len(),
            "Assembled failed payment email body"
        );

        EmailBody { paragraphs }
    }

    /// Builds the body and renders it as an HTML document.
    pub fn render_html(&self) -> MailResult<String> {
        HtmlRenderer.render(&self.build_body())
    }

    fn greeting(&self) -> Paragraph {
        Paragraph::new().text(&self.locale.greeting)
    }

    fn problem_description(&self) -> Paragraph {
        let paragraph = Paragraph::new().text(&self.locale.unfortunately);

        if self.data.is_personal() {
            return paragraph.text(&self.locale.personal_customer);
        }

        self.data.items.iter().fold(
            paragraph.text(&self.locale.organization_customer).line_break(),
            |paragraph, item| {
                paragraph
                    .text(format!("- {} x {}", item.quantity, item.description))
                    .line_break()
            },
        )
    }

    fn failure_reasons(&self) -> Paragraph {
        match self.data.card_provider {
            CardProvider::PayPal => {
                let reasons = &self.locale.paypal_card_reasons;
                reasons
                    .iter()
                    .enumerate()
                    .fold(Paragraph::new(), |paragraph, (index, reason)| {
                        let paragraph = paragraph.text(reason);
                        if index + 1 < reasons.len() {
                            paragraph.line_break()
                        } else {
                            paragraph
                        }
                    })
            }
            CardProvider::CreditCard => self
                .locale
                .credit_card_reasons
                .iter()
                .fold(Paragraph::new(), |paragraph, reason| {
                    paragraph.text(reason).line_break()
                }),
        }
    }

    fn renewal_prompt(&self) -> Paragraph {
        Paragraph::new()
            .text(&self.locale.to_ensure)
            .link(&self.renewal_url, &self.locale.href_sentence)
            .text(&self.locale.till)
    }

    fn double_check(&self) -> Paragraph {
        Paragraph::new().text(&self.locale.double_check)
    }
}
