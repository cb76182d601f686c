//! Link detection and autolinking.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Greedy up to the next whitespace, trailing punctuation included
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+|www\.\S+\.\S+").expect("URL regex pattern is valid")
});

/// Whether `text` holds at least one link-like substring.
pub(crate) fn contains_link(text: &str) -> bool {
    URL_RE.is_match(text)
}

/// Destination for a matched link; bare `www.` hosts get an `https://` scheme.
pub fn link_destination(url: &str) -> String {
    if url.starts_with("www.") {
        format!("https://{}", url)
    } else {
        url.to_string()
    }
}

/// Replace each link in already-escaped text with an anchor element.
pub(crate) fn linkify(escaped: &str) -> String {
    URL_RE
        .replace_all(escaped, |caps: &Captures| {
            let url = &caps[0];
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                link_destination(url),
                url
            )
        })
        .into_owned()
}
