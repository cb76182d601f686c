//! Shared helpers for the render pipeline.

use regex::Regex;

/// Escape the characters that are structurally significant in HTML.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `(pattern, replacement)` step of the formatter.
///
/// Rules are applied in sequence, each over the output of the previous one.
#[derive(Debug, Clone)]
pub(crate) struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Replacement may reference capture groups (`${1}`).
    pub(crate) fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Replacement is inserted verbatim; `$` carries no meaning.
    pub(crate) fn literal(pattern: Regex, replacement: &str) -> Self {
        Self::new(pattern, replacement.replace('$', "$$"))
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_literal_rule_ignores_dollar() {
        let rule = SubstitutionRule::literal(Regex::new("cash").unwrap(), "$1 cash");
        assert_eq!(rule.apply("no cash here"), "no $1 cash here");
    }

    #[test]
    fn test_template_rule_expands_groups() {
        let rule = SubstitutionRule::new(Regex::new(r"(\w+)@").unwrap(), "[${1}]");
        assert_eq!(rule.apply("bob@ alice@"), "[bob] [alice]");
    }
}
