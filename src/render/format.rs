//! Text formatter: line breaks, list markers and keyword highlighting.

use once_cell::sync::Lazy;
use regex::Regex;

use super::helpers::SubstitutionRule;
use super::keywords::KeywordSet;

static LIST_RULES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        SubstitutionRule::literal(
            Regex::new(r"\n").expect("line break pattern is valid"),
            "<br>",
        ),
        SubstitutionRule::new(
            Regex::new(r"([0-9]+)\.\s").expect("ordinal pattern is valid"),
            "<strong>${1}.</strong> ",
        ),
        SubstitutionRule::literal(
            Regex::new(r"-\s").expect("bullet pattern is valid"),
            "• ",
        ),
    ]
});

/// Format already-escaped text that contains no link.
pub(crate) fn format_text(escaped: &str, keywords: &KeywordSet) -> String {
    let formatted = LIST_RULES
        .iter()
        .fold(escaped.to_string(), |acc, rule| rule.apply(&acc));
    keywords.highlight(&formatted)
}
