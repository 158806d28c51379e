//! Tokenization engine.
//!
//! Text is cut at whitespace into candidate spans, then each span goes
//! through the following steps:
//!
//! 1. A span that is an exception key is emitted as the exception's tokens.
//! 2. A span accepted by the token-match predicate is emitted whole.
//! 3. Prefixes and suffixes are stripped, one of each per round, until
//!    nothing strips, the rest is empty, or the rest is itself an
//!    exception or token match.
//! 4. What is left is split at every infix.
//!
//! Suffixes are collected from the end inwards and emitted last, in text
//! order. Tokenization never fails: a span no rule touches is one token.
//! Whitespace is recorded, not emitted, so the input can be rebuilt exactly.

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use super::compile::{AffixKind, Matcher};
use super::exceptions::ExceptionTable;
use super::rules::{Pattern, INFIXES, PREFIXES, SUFFIXES};
use super::token::{Token, Tokens};
use super::token_match::{TokenMatch, UrlMatch};
use crate::error::BuildError;

/// Rule-based tokenizer. Immutable once built; share it freely between
/// threads.
pub struct Tokenizer {
    prefix: Matcher,
    suffix: Matcher,
    infix: Matcher,
    exceptions: ExceptionTable,
    token_match: Box<dyn TokenMatch>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("infix", &self.infix)
            .field("exceptions", &self.exceptions.len())
            .finish_non_exhaustive()
    }
}

/// Spans of the prefixes, the remaining core and the suffixes of one
/// candidate, relative to the candidate. Suffixes are in stripping order,
/// outermost first.
#[derive(Debug, Default)]
struct Affixes {
    prefixes: Vec<Range<usize>>,
    core: Range<usize>,
    suffixes: Vec<Range<usize>>,
}

impl Tokenizer {
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// English defaults merged with the scientific exceptions, URL matching
    /// and the standard rule catalog.
    pub fn scientific() -> Result<Self, BuildError> {
        TokenizerBuilder::new().build()
    }

    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Tokens<'a> {
        let mut tokens = Vec::new();
        let mut spans = whitespace_spans(text).peekable();
        let leading_end = spans.peek().map_or(text.len(), |first| first.start);

        while let Some(span) = spans.next() {
            let first = tokens.len();
            self.tokenize_span(text, span.clone(), &mut tokens);
            let gap_end = spans.peek().map_or(text.len(), |next| next.start);
            if tokens.len() > first {
                if let Some(last) = tokens.last_mut() {
                    last.whitespace = &text[span.end..gap_end];
                }
            }
        }
        Tokens::new(&text[..leading_end], tokens)
    }

    fn tokenize_span<'a>(&self, text: &'a str, span: Range<usize>, out: &mut Vec<Token<'a>>) {
        let base = span.start;
        let candidate = &text[span.clone()];
        trace!(candidate, "tokenizing span");

        if let Some(pieces) = self.exceptions.get(candidate) {
            push_pieces(text, base, pieces, out);
            return;
        }
        if self.token_match.is_match(candidate) {
            out.push(Token::new(text, span));
            return;
        }

        let affixes = self.split_affixes(candidate);
        for prefix in &affixes.prefixes {
            out.push(Token::new(text, shift(prefix, base)));
        }
        self.attach_core(text, shift(&affixes.core, base), out);
        for suffix in affixes.suffixes.iter().rev() {
            out.push(Token::new(text, shift(suffix, base)));
        }
    }

    fn is_special(&self, candidate: &str) -> bool {
        self.exceptions.contains(candidate)
    }

    fn split_affixes(&self, candidate: &str) -> Affixes {
        let mut affixes = Affixes::default();
        let (mut lo, mut hi) = (0, candidate.len());
        let mut last_len = None;

        while lo < hi && last_len != Some(hi - lo) {
            let rest = &candidate[lo..hi];
            if self.token_match.is_match(rest) || self.is_special(rest) {
                break;
            }
            last_len = Some(rest.len());

            let pre_len = self.prefix.prefix_len(rest).unwrap_or(0);
            if pre_len > 0 {
                let minus_pre = &rest[pre_len..];
                if !minus_pre.is_empty() && self.is_special(minus_pre) {
                    affixes.prefixes.push(lo..lo + pre_len);
                    lo += pre_len;
                    break;
                }
            }

            let suf_len = self.suffix.suffix_len(&rest[pre_len..]).unwrap_or(0);
            if suf_len > 0 {
                let minus_suf = &rest[..rest.len() - suf_len];
                if !minus_suf.is_empty() && self.is_special(minus_suf) {
                    affixes.suffixes.push(hi - suf_len..hi);
                    hi -= suf_len;
                    break;
                }
            }

            if pre_len > 0 {
                affixes.prefixes.push(lo..lo + pre_len);
                lo += pre_len;
            }
            if suf_len > 0 {
                affixes.suffixes.push(hi - suf_len..hi);
                hi -= suf_len;
            }

            if lo < hi && self.is_special(&candidate[lo..hi]) {
                break;
            }
        }

        affixes.core = lo..hi;
        affixes
    }

    fn attach_core<'a>(&self, text: &'a str, core: Range<usize>, out: &mut Vec<Token<'a>>) {
        if core.is_empty() {
            return;
        }
        let rest = &text[core.clone()];
        if let Some(pieces) = self.exceptions.get(rest) {
            push_pieces(text, core.start, pieces, out);
            return;
        }
        if self.token_match.is_match(rest) {
            out.push(Token::new(text, core));
            return;
        }

        let mut start = 0;
        for infix in self.infix.find_all(rest) {
            // An infix at the very start stays attached to what follows.
            if infix.start == 0 {
                continue;
            }
            if infix.start != start {
                out.push(Token::new(text, shift(&(start..infix.start), core.start)));
            }
            out.push(Token::new(text, shift(&infix, core.start)));
            start = infix.end;
        }
        if start < rest.len() {
            out.push(Token::new(text, shift(&(start..rest.len()), core.start)));
        }
    }
}

fn shift(range: &Range<usize>, by: usize) -> Range<usize> {
    range.start + by..range.end + by
}

fn push_pieces<'a>(text: &'a str, mut start: usize, pieces: &[String], out: &mut Vec<Token<'a>>) {
    for piece in pieces {
        let end = start + piece.len();
        out.push(Token::new(text, start..end));
        start = end;
    }
}

/// Byte ranges of the maximal runs of non-whitespace characters.
fn whitespace_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let (start, first) = chars.next()?;
        let mut end = start + first.len_utf8();
        while let Some((i, c)) = chars.next_if(|(_, c)| !c.is_whitespace()) {
            end = i + c.len_utf8();
        }
        Some(start..end)
    })
}

/// Assembles a [`Tokenizer`]. Starts from the standard rule catalog, the
/// English default exceptions with the scientific table layered on top, and
/// URL token matching.
pub struct TokenizerBuilder {
    default_exceptions: ExceptionTable,
    exceptions: ExceptionTable,
    token_match: Box<dyn TokenMatch>,
    prefixes: Vec<Pattern>,
    suffixes: Vec<Pattern>,
    infixes: Vec<Pattern>,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        Self {
            default_exceptions: ExceptionTable::english(),
            exceptions: ExceptionTable::scientific(),
            token_match: Box::new(UrlMatch),
            prefixes: PREFIXES.clone(),
            suffixes: SUFFIXES.clone(),
            infixes: INFIXES.clone(),
        }
    }

    /// The host's default exception table, merged under [`Self::exceptions`].
    pub fn default_exceptions(mut self, table: ExceptionTable) -> Self {
        self.default_exceptions = table;
        self
    }

    /// Exceptions layered over the defaults; they win on collisions.
    pub fn exceptions(mut self, table: ExceptionTable) -> Self {
        self.exceptions = table;
        self
    }

    pub fn token_match(mut self, token_match: impl TokenMatch + 'static) -> Self {
        self.token_match = Box::new(token_match);
        self
    }

    pub fn prefixes(mut self, patterns: Vec<Pattern>) -> Self {
        self.prefixes = patterns;
        self
    }

    pub fn suffixes(mut self, patterns: Vec<Pattern>) -> Self {
        self.suffixes = patterns;
        self
    }

    pub fn infixes(mut self, patterns: Vec<Pattern>) -> Self {
        self.infixes = patterns;
        self
    }

    pub fn build(self) -> Result<Tokenizer, BuildError> {
        let exceptions = ExceptionTable::merge(&self.default_exceptions, &self.exceptions);
        exceptions.validate()?;

        let prefix = Matcher::compile(AffixKind::Prefix, &self.prefixes)?;
        let suffix = Matcher::compile(AffixKind::Suffix, &self.suffixes)?;
        let infix = Matcher::compile(AffixKind::Infix, &self.infixes)?;
        debug!(exceptions = exceptions.len(), "built tokenizer");

        Ok(Tokenizer {
            prefix,
            suffix,
            infix,
            exceptions,
            token_match: self.token_match,
        })
    }
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
