//! Abstract block model of an email body.
//!
//! The assembler only decides grouping: paragraphs, line breaks inside a
//! paragraph and a single inline link. Turning that into markup is left to
//! a [`BodyRenderer`](crate::BodyRenderer).

use serde::Serialize;

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text, rendered as-is.
    Text {
        /// The text.
        text: String,
    },
    /// A line break within the paragraph.
    LineBreak,
    /// A hyperlink.
    Link {
        /// Link target.
        href: String,
        /// Link text.
        text: String,
    },
}

/// A paragraph: an ordered run of inline content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Inline content in display order.
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    /// Creates an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.inlines.push(Inline::Text { text: text.into() });
        self
    }

    /// Appends a line break.
    #[must_use]
    pub fn line_break(mut self) -> Self {
        self.inlines.push(Inline::LineBreak);
        self
    }

    /// Appends a link.
    #[must_use]
    pub fn link(mut self, href: impl Into<String>, text: impl Into<String>) -> Self {
        self.inlines.push(Inline::Link {
            href: href.into(),
            text: text.into(),
        });
        self
    }

    /// Whether the paragraph ends with a line break.
    pub fn ends_with_line_break(&self) -> bool {
        matches!(self.inlines.last(), Some(Inline::LineBreak))
    }

    /// Number of line breaks in the paragraph.
    pub fn line_break_count(&self) -> usize {
        self.inlines
            .iter()
            .filter(|inline| matches!(inline, Inline::LineBreak))
            .count()
    }

    /// Concatenated text and link text, ignoring line breaks.
    pub fn plain_text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Text { text } | Inline::Link { text, .. } => Some(text.as_str()),
                Inline::LineBreak => None,
            })
            .collect()
    }
}

/// The complete body of an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailBody {
    /// Paragraphs in display order.
    pub paragraphs: Vec<Paragraph>,
}
