//! Token type and detokenization.

use std::fmt;
use std::ops::{Deref, Range};

use serde::Serialize;

/// A token borrowed from the tokenized text.
///
/// `span` is the byte range of `text` in the input. `whitespace` is the
/// whitespace between this token and the next one (or the end of input); it
/// is empty for tokens that were split out of a larger span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
    pub whitespace: &'a str,
}

impl<'a> Token<'a> {
    pub(crate) fn new(source: &'a str, span: Range<usize>) -> Self {
        Self {
            text: &source[span.clone()],
            span,
            whitespace: "",
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// The tokens of one input, with the whitespace that precedes the first of
/// them. Derefs to a slice of [`Token`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokens<'a> {
    pub leading_whitespace: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(leading_whitespace: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self {
            leading_whitespace,
            tokens,
        }
    }

    pub fn into_vec(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl<'a> Deref for Tokens<'a> {
    type Target = [Token<'a>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for Tokens<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s Tokens<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Rebuild the tokenized input from its leading whitespace, the tokens and
/// their trailing whitespace.
pub fn detokenize(tokens: &Tokens) -> String {
    let mut result = String::from(tokens.leading_whitespace);
    for token in tokens {
        result.push_str(token.text);
        result.push_str(token.whitespace);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detokenize_joins_text_and_whitespace() {
        let source = "\n a b\tc";
        let tokens = Tokens::new(
            &source[..2],
            vec![
                Token {
                    whitespace: " ",
                    ..Token::new(source, 2..3)
                },
                Token {
                    whitespace: "\t",
                    ..Token::new(source, 4..5)
                },
                Token::new(source, 6..7),
            ],
        );
        assert_eq!(detokenize(&tokens), source);
        assert_eq!(tokens[1].to_string(), "b");
        assert_eq!((tokens[2].start(), tokens[2].end()), (6, 7));
    }

    #[test]
    fn whitespace_only_input_survives_detokenize() {
        let tokens = Tokens::new(" \n\t", Vec::new());
        assert!(tokens.is_empty());
        assert_eq!(detokenize(&tokens), " \n\t");
        assert_eq!(detokenize(&Tokens::default()), "");
    }
}
