//! # scitok
//!
//! A rule-based word tokenizer tuned for scientific and biomedical prose.
//!
//! Beyond the usual English rules it keeps abbreviations such as `Fig.` and
//! `al.` whole, splits units from the numbers they follow (`5kg` becomes
//! `5 kg`) and leaves balanced parentheses inside identifiers alone (`f(x)`).
//!
//! ```text
//! let tokenizer = Tokenizer::scientific()?;
//! let tokens = tokenizer.tokenize("(see Fig. 3)");
//! // ( see Fig. 3 )
//! ```
//!
//! [`config`] builds a tokenizer from layered TOML files and [`preprocess`]
//! holds the text clean-up applied before tokenizing.

pub mod config;
pub mod error;
pub mod preprocess;
pub mod tokenizer;

pub use error::{BuildError, CompileError};
pub use preprocess::remove_line_wrap_hyphens;
pub use tokenizer::{detokenize, ExceptionTable, Token, Tokenizer, TokenizerBuilder, Tokens};
