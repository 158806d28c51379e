//! Rule catalog: the ordered prefix, suffix and infix pattern lists.
//!
//! List order is alternation priority. When two rules match at the same
//! position the one listed first wins, so the lists must not be reordered.
//!
//! Rule bodies use the `fancy-regex` dialect (look-ahead and fixed-width
//! look-behind). The two rules that need a variable-width look-behind carry a
//! [`Guard`] instead, which is checked against the text preceding a candidate.

use once_cell::sync::Lazy;

use super::char_classes::{
    merge_chars, split_chars, ALPHA, ALPHA_LOWER, ALPHA_UPPER, CURRENCY, ELLIPSES, HYPHENS, ICONS,
    PUNCT, QUOTES, QUOTE_CHARS, UNITS,
};

/// A single rule: a regex fragment and an optional context guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub fragment: String,
    pub guard: Option<Guard>,
}

/// Condition on the text immediately before a match.
///
/// `preceding` is a `regex` pattern that is anchored to the end of that text
/// when compiled. With `negated` set the rule only applies where it does not
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    pub preceding: String,
    pub negated: bool,
}

impl Pattern {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            guard: None,
        }
    }

    /// A rule matching `text` verbatim.
    pub fn literal(text: &str) -> Self {
        Self::new(fancy_regex::escape(text))
    }

    pub fn preceded_by(mut self, preceding: impl Into<String>) -> Self {
        self.guard = Some(Guard {
            preceding: preceding.into(),
            negated: false,
        });
        self
    }

    pub fn not_preceded_by(mut self, preceding: impl Into<String>) -> Self {
        self.guard = Some(Guard {
            preceding: preceding.into(),
            negated: true,
        });
        self
    }
}

impl From<&str> for Pattern {
    fn from(fragment: &str) -> Self {
        Pattern::new(fragment)
    }
}

impl From<String> for Pattern {
    fn from(fragment: String) -> Self {
        Pattern::new(fragment)
    }
}

const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Prefixes that come before the shared punctuation.
const LEADING_PREFIXES: [&str; 4] = ["§", "%", "=", r"\+"];

const POSSESSIVES: [&str; 4] = ["'s", "'S", "’s", "’S"];

pub static PREFIXES: Lazy<Vec<Pattern>> = Lazy::new(prefix_patterns);
pub static SUFFIXES: Lazy<Vec<Pattern>> = Lazy::new(suffix_patterns);
pub static INFIXES: Lazy<Vec<Pattern>> = Lazy::new(infix_patterns);

/// An opening bracket glued to `word)more` is left in place. Known to be
/// unreliable for unbalanced brackets.
fn open_bracket(open: char, close: char) -> Pattern {
    let o = fancy_regex::escape(open.encode_utf8(&mut [0; 4])).into_owned();
    let c = fancy_regex::escape(close.encode_utf8(&mut [0; 4])).into_owned();
    Pattern::new(format!(r"{o}(?![^{o}\s]+{c}\S+)"))
}

/// A closing bracket is kept when `text(word` precedes it. Same caveat as
/// [`open_bracket`].
fn close_bracket(open: char, close: char) -> Pattern {
    let o = regex::escape(open.encode_utf8(&mut [0; 4]));
    let c = regex::escape(close.encode_utf8(&mut [0; 4]));
    Pattern::literal(close.encode_utf8(&mut [0; 4])).not_preceded_by(format!(r"\S+{o}[^{c}\s]+"))
}

fn punctuation(bracket: fn(char, char) -> Pattern, guarded: fn(&(char, char)) -> char) -> Vec<Pattern> {
    PUNCT
        .iter()
        .map(|p| {
            let mut chars = p.chars();
            let single = match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            };
            match single.and_then(|c| BRACKETS.iter().find(|pair| guarded(pair) == c)) {
                Some(&(open, close)) => bracket(open, close),
                None => Pattern::literal(p),
            }
        })
        .collect()
}

/// Single characters that may precede a number, as a `regex` class body.
fn prefix_chars() -> String {
    LEADING_PREFIXES
        .iter()
        .chain(PUNCT)
        .chain(QUOTES)
        .chain(CURRENCY)
        .map(|p| p.trim_start_matches('\\'))
        .filter(|p| p.chars().count() == 1)
        .map(regex::escape)
        .collect()
}

pub fn prefix_patterns() -> Vec<Pattern> {
    let mut patterns: Vec<Pattern> = LEADING_PREFIXES.iter().copied().map(Pattern::from).collect();
    patterns.extend(punctuation(open_bracket, |pair| pair.0));
    patterns.extend(ELLIPSES.iter().copied().map(Pattern::from));
    patterns.extend(split_chars(QUOTES).into_iter().map(Pattern::from));
    patterns.extend(split_chars(CURRENCY).into_iter().map(Pattern::from));
    patterns.extend(ICONS.iter().copied().map(Pattern::from));
    patterns
}

pub fn suffix_patterns() -> Vec<Pattern> {
    let mut patterns = punctuation(close_bracket, |pair| pair.1);
    patterns.extend(ELLIPSES.iter().copied().map(Pattern::from));
    patterns.extend(split_chars(QUOTES).into_iter().map(Pattern::from));
    patterns.push(Pattern::literal("’"));
    patterns.extend(ICONS.iter().copied().map(Pattern::from));
    patterns.extend(POSSESSIVES.iter().map(|p| Pattern::literal(p)));
    patterns.push(Pattern::new(r"(?<=[0-9])\+"));
    patterns.push(Pattern::new(r"(?<=°[FfCcKk])\."));
    patterns.push(Pattern::new(format!(
        r"(?<=[0-9])(?:{})",
        merge_chars(CURRENCY)
    )));
    // Units split only off a numeral run, so codes like `H3g` stay whole.
    patterns.push(
        Pattern::new(format!("(?:{})", merge_chars(UNITS)))
            .preceded_by(format!(r"^[0-9]+|\s[{}]*[0-9]+", prefix_chars())),
    );
    // `(`, `?`, `:` and `|` belong to the class too, so `what?.` ends in a period.
    patterns.push(Pattern::new(format!(
        r"(?<=[0-9{ALPHA_LOWER}%²\-\)\]\+\(\?:\|{}])\.",
        QUOTE_CHARS.as_str()
    )));
    patterns.push(Pattern::new(format!(
        r"(?<=[{ALPHA_UPPER}|\d][{ALPHA_UPPER}])\."
    )));
    patterns
}

pub fn infix_patterns() -> Vec<Pattern> {
    let mut patterns: Vec<Pattern> = ELLIPSES.iter().copied().map(Pattern::from).collect();
    patterns.extend(ICONS.iter().copied().map(Pattern::from));
    patterns.push(Pattern::literal("×"));
    patterns.push(Pattern::new(r"(?<=[0-9])[+\-\*^](?=[0-9-])"));
    patterns.push(Pattern::new(format!(
        r"(?<=[{ALPHA_LOWER}])\.(?=[{ALPHA_UPPER}])"
    )));
    patterns.push(Pattern::new(format!(r"(?<=[{ALPHA}]),(?=[{ALPHA}])")));
    patterns.push(Pattern::new(format!(
        r#"(?<=[{ALPHA}])[?";:=,.]*(?:{})(?=[{ALPHA}])"#,
        merge_chars(HYPHENS)
    )));
    // No `/`: fractions and paths stay whole.
    patterns.push(Pattern::new(format!(r#"(?<=[{ALPHA}"])[:<>=](?=[{ALPHA}])"#)));
    patterns
}
