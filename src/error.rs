//! Error types for building a tokenizer.
//!
//! Tokenizing itself never fails; everything here surfaces at construction.

use thiserror::Error;

use crate::tokenizer::compile::AffixKind;

/// A pattern list could not be compiled.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{kind} pattern #{index} is empty")]
    EmptyPattern { kind: AffixKind, index: usize },

    #[error("invalid {kind} pattern `{pattern}`: {source}")]
    InvalidPattern {
        kind: AffixKind,
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("invalid {kind} context guard `{pattern}`: {source}")]
    InvalidGuard {
        kind: AffixKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Construction failed; no tokenizer was produced.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("invalid exception `{key}`: {reason}")]
    InvalidException { key: String, reason: &'static str },
}
