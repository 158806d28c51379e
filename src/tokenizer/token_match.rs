//! Whole-span acceptance predicates.
//!
//! A span accepted by the tokenizer's [`TokenMatch`] is emitted as one token
//! and never split further.

use once_cell::sync::Lazy;
use regex::Regex;

pub trait TokenMatch: Send + Sync {
    fn is_match(&self, span: &str) -> bool;
}

impl<F> TokenMatch for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_match(&self, span: &str) -> bool {
        self(span)
    }
}

/// URLs and bare host names, with optional scheme, credentials, port and path.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^",
        r"(?:[\w+\-.]{2,}://)?",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:(?:[A-Za-z0-9\x{a1}-\x{ffff}][A-Za-z0-9\x{a1}-\x{ffff}_-]{0,62})?[A-Za-z0-9\x{a1}-\x{ffff}]\.)+",
        r"[a-z\x{a1}-\x{ffff}]{2,63}",
        r"(?::\d{2,5})?",
        r"(?:[/?#]\S*)?",
        r"$"
    ))
    .expect("URL pattern is valid")
});

/// Accepts spans that look like URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlMatch;

impl TokenMatch for UrlMatch {
    fn is_match(&self, span: &str) -> bool {
        URL_REGEX.is_match(span)
    }
}

/// Accepts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMatch;

impl TokenMatch for NoMatch {
    fn is_match(&self, _span: &str) -> bool {
        false
    }
}
