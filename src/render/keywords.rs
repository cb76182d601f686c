//! The highlighted keyword vocabulary.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::helpers::escape_html;
use crate::error::ChatError;

// Tags and entities already present in the text being highlighted
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>|&(?:[A-Za-z]+|#[0-9]+);").expect("markup pattern is valid")
});

/// Terms highlighted when the configuration does not name its own.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Instagram",
    "YouTube",
    "Facebook",
    "content",
    "marketing",
    "engagement",
];

/// One term's whole-word pattern and the span that replaces it.
#[derive(Debug, Clone)]
struct HighlightRule {
    pattern: Regex,
    span: String,
}

impl HighlightRule {
    /// Wrap every match that leaves existing tags and entities intact.
    ///
    /// A match may contain a whole entity (`Q&amp;A`) but never part of one,
    /// and never any part of a tag.
    fn apply(&self, text: &str) -> String {
        let markup: Vec<Range<usize>> = MARKUP_RE.find_iter(text).map(|m| m.range()).collect();

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            if markup.iter().any(|r| splits(m.range(), r)) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str(&self.span);
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Whether `m` overlaps `markup` without covering all of it
fn splits(m: Range<usize>, markup: &Range<usize>) -> bool {
    let overlaps = m.start < markup.end && markup.start < m.end;
    let covers = m.start <= markup.start && markup.end <= m.end;
    overlaps && !covers
}

/// Ordered, case-insensitive set of terms to highlight.
///
/// Each term becomes one whole-word highlight rule. The rules run in the
/// order the terms were declared, so overlapping terms wrap text more than
/// once.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    terms: Vec<String>,
    rules: Vec<HighlightRule>,
}

impl KeywordSet {
    /// Build a set from `terms`, skipping blank entries.
    pub fn new<I, S>(terms: I) -> Result<Self, ChatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        let mut rules = Vec::new();

        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                continue;
            }
            // Matching happens on escaped text, so the pattern must be escaped too
            let escaped = escape_html(term);
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&escaped)))?;
            let span = format!(r#"<span class="highlight">{}</span>"#, escaped);
            rules.push(HighlightRule { pattern, span });
            kept.push(term.to_string());
        }

        Ok(Self { terms: kept, rules })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Wrap every occurrence of every term, term by term.
    pub(crate) fn highlight(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS).expect("built-in keyword patterns are valid")
    }
}
