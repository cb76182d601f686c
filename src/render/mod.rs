//! Message rendering: raw chat text to safe, styled HTML.
//!
//! A message goes through exactly one of two stages. If it contains a
//! link-like substring, every link is turned into an anchor and nothing else
//! is touched. Otherwise the text formatter handles line breaks, list
//! markers and keyword highlighting. Input is HTML-escaped first in both
//! cases.

mod format;
mod helpers;
mod keywords;
mod links;

use std::fmt;

use once_cell::sync::Lazy;

pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use links::link_destination;

/// HTML markup derived from a raw message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedMarkup(String);

impl RenderedMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stateless renderer bound to one keyword set.
#[derive(Debug, Clone, Default)]
pub struct MessageRenderer {
    keywords: KeywordSet,
}

impl MessageRenderer {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Render one raw message. Never fails; empty input gives empty markup.
    pub fn render(&self, raw: &str) -> RenderedMarkup {
        let escaped = helpers::escape_html(raw);
        let markup = if links::contains_link(&escaped) {
            links::linkify(&escaped)
        } else {
            format::format_text(&escaped, &self.keywords)
        };
        RenderedMarkup(markup)
    }
}

static DEFAULT_RENDERER: Lazy<MessageRenderer> = Lazy::new(MessageRenderer::default);

/// Render with the built-in keyword set.
pub fn render_message(raw: &str) -> RenderedMarkup {
    DEFAULT_RENDERER.render(raw)
}
