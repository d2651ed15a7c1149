//! Output formats for an [`EmailBody`].

use crate::body::{EmailBody, Inline};
use crate::error::MailResult;
use crate::traits::BodyRenderer;
use std::fmt::Write as _;

/// Renders a body as a minimal HTML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

/// Renders a body as plain text, one blank line between paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

/// Renders the block model itself as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl BodyRenderer for HtmlRenderer {
    fn render(&self, body: &EmailBody) -> MailResult<String> {
        let mut html = String::from("<html><body>");

        for paragraph in &body.paragraphs {
            html.push_str("<p>");
            for inline in &paragraph.inlines {
                match inline {
                    Inline::Text { text } => html.push_str(&escape_html(text)),
                    Inline::LineBreak => html.push_str("<br>"),
                    Inline::Link { href, text } => {
                        let _ = write!(
                            html,
                            "<a href=\"{}\">{}</a>",
                            escape_html(href),
                            escape_html(text)
                        );
                    }
                }
            }
            html.push_str("</p>");
        }

        html.push_str("</body></html>");
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "html"
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

impl BodyRenderer for PlainTextRenderer {
    fn render(&self, body: &EmailBody) -> MailResult<String> {
        let paragraphs: Vec<String> = body
            .paragraphs
            .iter()
            .map(|paragraph| {
                let mut text = String::new();
                for inline in &paragraph.inlines {
                    match inline {
                        Inline::Text { text: fragment } => text.push_str(fragment),
                        Inline::LineBreak => text.push('\n'),
                        Inline::Link { href, text: label } => {
                            let _ = write!(text, "{label} ({href})");
                        }
                    }
                }
                text.trim_end_matches('\n').to_string()
            })
            .collect();

        Ok(paragraphs.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}

impl BodyRenderer for JsonRenderer {
    fn render(&self, body: &EmailBody) -> MailResult<String> {
        Ok(serde_json::to_string_pretty(body)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Paragraph;

    fn sample_body() -> EmailBody {
        EmailBody {
            paragraphs: vec![
                Paragraph::new().text("Hello & welcome"),
                Paragraph::new()
                    .text("- 2 x <Pack>")
                    .line_break()
                    .text("renew ")
                    .link("https://foo.bar/ex?a=1&b=2", "manually")
                    .line_break(),
            ],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
        assert_eq!(escape_html("Kartenzahlungen: "), "Kartenzahlungen: ");
    }

    #[test]
    fn test_html_rendering() {
        let html = HtmlRenderer.render(&sample_body()).unwrap();

        assert_eq!(
            html,
            "<html><body><p>Hello &amp; welcome</p><p>- 2 x &lt;Pack&gt;<br>renew \
             <a href=\"https://foo.bar/ex?a=1&amp;b=2\">manually</a><br></p></body></html>"
        );
    }

    #[test]
    fn test_plain_text_rendering() {
        let text = PlainTextRenderer.render(&sample_body()).unwrap();

        assert_eq!(
            text,
            "Hello & welcome\n\n- 2 x <Pack>\nrenew manually (https://foo.bar/ex?a=1&b=2)"
        );
    }

    #[test]
    fn test_json_rendering_round_trips_structure() {
        let json = JsonRenderer.render(&sample_body()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["paragraphs"].as_array().unwrap().len(), 2);
        assert_eq!(value["paragraphs"][1]["inlines"][3]["type"], "link");
    }

    #[test]
    fn test_renderer_metadata() {
        let renderers: [&dyn BodyRenderer; 3] = [&HtmlRenderer, &PlainTextRenderer, &JsonRenderer];
        let names: Vec<_> = renderers.iter().map(|renderer| renderer.name()).collect();

        assert_eq!(names, ["html", "text", "json"]);
        assert!(HtmlRenderer.content_type().starts_with("text/html"));
    }
}
