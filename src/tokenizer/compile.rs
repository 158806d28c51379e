//! Pattern compiler.
//!
//! Each pattern list becomes one [`Matcher`]. Runs of unguarded patterns are
//! joined into a single alternation; a guarded pattern gets an alternation of
//! its own so its guard can veto individual candidates. The matcher reports
//! the leftmost candidate over all alternations, earlier alternations winning
//! ties, which is the same result a single leftmost-first alternation over the
//! whole list would give.

use std::fmt;
use std::ops::Range;

use fancy_regex::Regex;
use tracing::{debug, warn};

use super::rules::{Guard, Pattern};
use crate::error::CompileError;

/// Where a matcher looks for its affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// Anchored at the start of the text.
    Prefix,
    /// Anchored at the end of the text.
    Suffix,
    /// Anywhere in the text.
    Infix,
}

impl AffixKind {
    fn anchor(self, body: &str) -> String {
        match self {
            AffixKind::Prefix => format!("^(?:{body})"),
            AffixKind::Suffix => format!("(?:{body})$"),
            AffixKind::Infix => format!("(?:{body})"),
        }
    }
}

impl fmt::Display for AffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffixKind::Prefix => write!(f, "prefix"),
            AffixKind::Suffix => write!(f, "suffix"),
            AffixKind::Infix => write!(f, "infix"),
        }
    }
}

#[derive(Debug)]
struct CompiledGuard {
    preceding: regex::Regex,
    negated: bool,
}

impl CompiledGuard {
    fn compile(kind: AffixKind, guard: &Guard) -> Result<Self, CompileError> {
        let preceding = regex::Regex::new(&format!("(?:{})$", guard.preceding)).map_err(|source| {
            CompileError::InvalidGuard {
                kind,
                pattern: guard.preceding.clone(),
                source,
            }
        })?;
        Ok(Self {
            preceding,
            negated: guard.negated,
        })
    }

    fn admits(&self, before: &str) -> bool {
        self.preceding.is_match(before) != self.negated
    }
}

#[derive(Debug)]
struct Alternation {
    regex: Regex,
    guard: Option<CompiledGuard>,
}

impl Alternation {
    fn compile(kind: AffixKind, fragments: &[&str], guard: Option<CompiledGuard>) -> Result<Self, CompileError> {
        let body = fragments.join("|");
        let regex = Regex::new(&kind.anchor(&body)).map_err(|source| CompileError::InvalidPattern {
            kind,
            pattern: body.clone(),
            source,
        })?;
        Ok(Self { regex, guard })
    }

    /// Leftmost admitted match starting at or after `pos`.
    fn find(&self, text: &str, mut pos: usize) -> Option<Range<usize>> {
        loop {
            let found = match self.regex.find_from_pos(text, pos) {
                Ok(Some(m)) => m.start()..m.end(),
                Ok(None) => return None,
                Err(err) => {
                    warn!(pattern = self.regex.as_str(), error = %err, "regex failed while matching");
                    return None;
                }
            };
            match &self.guard {
                Some(guard) if !guard.admits(&text[..found.start]) => {
                    pos = next_char_boundary(text, found.start)?;
                }
                _ => return Some(found),
            }
        }
    }
}

fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

/// A compiled pattern list for one affix kind. Immutable and shareable
/// between threads.
#[derive(Debug)]
pub struct Matcher {
    kind: AffixKind,
    alternations: Vec<Alternation>,
}

impl Matcher {
    /// Compile `patterns`, preserving their order.
    pub fn compile(kind: AffixKind, patterns: &[Pattern]) -> Result<Self, CompileError> {
        let mut alternations = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.fragment.is_empty() {
                return Err(CompileError::EmptyPattern { kind, index });
            }
            // Checked alone so the error names the offending fragment.
            Regex::new(&pattern.fragment).map_err(|source| CompileError::InvalidPattern {
                kind,
                pattern: pattern.fragment.clone(),
                source,
            })?;

            match &pattern.guard {
                None => pending.push(&pattern.fragment),
                Some(guard) => {
                    if !pending.is_empty() {
                        alternations.push(Alternation::compile(kind, &pending, None)?);
                        pending.clear();
                    }
                    let guard = CompiledGuard::compile(kind, guard)?;
                    alternations.push(Alternation::compile(kind, &[&pattern.fragment], Some(guard))?);
                }
            }
        }
        if !pending.is_empty() {
            alternations.push(Alternation::compile(kind, &pending, None)?);
        }

        debug!(
            %kind,
            patterns = patterns.len(),
            alternations = alternations.len(),
            "compiled matcher"
        );
        Ok(Self { kind, alternations })
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    /// Leftmost match starting at or after `pos`.
    pub fn find_at(&self, text: &str, pos: usize) -> Option<Range<usize>> {
        let mut best: Option<Range<usize>> = None;
        for alternation in &self.alternations {
            if let Some(found) = alternation.find(text, pos) {
                if best.as_ref().map_or(true, |b| found.start < b.start) {
                    best = Some(found);
                }
            }
        }
        best
    }

    /// Length of the prefix at the start of `text`, if any.
    pub fn prefix_len(&self, text: &str) -> Option<usize> {
        self.find_at(text, 0)
            .filter(|m| m.start == 0 && !m.is_empty())
            .map(|m| m.end)
    }

    /// Length of the suffix at the end of `text`, if any.
    pub fn suffix_len(&self, text: &str) -> Option<usize> {
        self.find_at(text, 0)
            .filter(|m| m.end == text.len() && !m.is_empty())
            .map(|m| m.len())
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        let mut matches = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(found) = self.find_at(text, pos) else {
                break;
            };
            if found.is_empty() {
                match next_char_boundary(text, found.start) {
                    Some(next) => pos = next,
                    None => break,
                }
                continue;
            }
            pos = found.end;
            matches.push(found);
        }
        matches
    }
}
