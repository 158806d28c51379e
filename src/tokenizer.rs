//! Rule-based word tokenizer for scientific text.
//!
//! The tokenizer is assembled from four pieces:
//!
//! - [`char_classes`]: character inventories the rules are written over
//! - [`rules`]: the ordered prefix, suffix and infix pattern lists
//! - [`compile`]: turns a pattern list into an anchored [`Matcher`]
//! - [`exceptions`]: literal spans with a fixed tokenization
//!
//! [`engine`] drives them over input text and produces borrowed [`Token`]s.

pub mod char_classes;
pub mod compile;
pub mod engine;
pub mod exceptions;
pub mod rules;
pub mod token;
pub mod token_match;

pub use compile::{AffixKind, Matcher};
pub use engine::{Tokenizer, TokenizerBuilder};
pub use exceptions::ExceptionTable;
pub use rules::{Guard, Pattern};
pub use token::{detokenize, Token, Tokens};
pub use token_match::{NoMatch, TokenMatch, UrlMatch};
