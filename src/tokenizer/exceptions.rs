//! Exception table: literal spans with a fixed tokenization.
//!
//! An entry maps a surface string to the tokens it is split into. The tokens
//! must concatenate back to the key; [`ExceptionTable::validate`] checks this
//! when a tokenizer is built.

use std::collections::HashMap;

use crate::error::BuildError;

/// Abbreviations common in scientific writing, kept whole with their period.
pub const SCIENTIFIC_ABBREVIATIONS: &[&str] = &[
    "sec.", "secs.", "Sec.", "Secs.", "fig.", "figs.", "Fig.", "Figs.", "eq.", "eqs.", "Eq.",
    "Eqs.", "no.", "nos.", "No.", "Nos.", "al.",
];

pub const POSSESSIVE_SUFFIXES: &[&str] = &["'s", "’s"];

const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "a.m.", "p.m.", "e.g.", "E.g.", "i.e.", "I.e.", "etc.", "vs.", "cf.", "approx.", "ca.", "Dr.",
    "Mr.", "Mrs.", "Ms.", "Prof.", "Inc.", "Ltd.", "Co.", "Corp.", "Jr.", "Sr.", "St.", "Ph.D.",
    "U.S.", "U.K.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Sept.",
    "Oct.", "Nov.", "Dec.",
];

/// Negated auxiliaries, as the stem left before `n't`.
const NEGATED_STEMS: &[&str] = &[
    "do", "does", "did", "is", "are", "was", "were", "has", "have", "had", "could", "should",
    "would", "must", "need", "ca", "wo", "sha",
];

const SPLIT_WORDS: &[&[&str]] = &[&["can", "not"], &["let", "'s"], &["it", "'s"]];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Literal overrides consulted before any affix or infix rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionTable {
    entries: HashMap<String, Vec<String>>,
}

impl ExceptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, returning the tokens it replaced.
    pub fn insert(&mut self, key: impl Into<String>, tokens: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(key.into(), tokens)
    }

    /// Add an entry that keeps `key` as one token.
    pub fn insert_whole(&mut self, key: &str) -> Option<Vec<String>> {
        self.insert(key, vec![key.to_string()])
    }

    /// Add an entry from its tokens; the key is their concatenation.
    pub fn insert_split(&mut self, tokens: &[&str]) -> Option<Vec<String>> {
        self.insert(
            tokens.concat(),
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every entry of `default` plus every entry of `additions`; on a key
    /// collision the addition wins.
    pub fn merge(default: &ExceptionTable, additions: &ExceptionTable) -> ExceptionTable {
        default.clone().merged_with(additions)
    }

    /// Layer `additions` over this table.
    pub fn merged_with(mut self, additions: &ExceptionTable) -> Self {
        for (key, tokens) in &additions.entries {
            self.entries.insert(key.clone(), tokens.clone());
        }
        self
    }

    /// Scientific abbreviations and their possessive forms.
    pub fn scientific() -> Self {
        let mut table = Self::new();
        for abbreviation in SCIENTIFIC_ABBREVIATIONS {
            table.insert_whole(abbreviation);
            for suffix in POSSESSIVE_SUFFIXES {
                table.insert_split(&[*abbreviation, *suffix]);
            }
        }
        table
    }

    /// A compact English base table, standing in for the defaults of the
    /// host language pipeline.
    pub fn english() -> Self {
        let mut table = Self::new();
        for abbreviation in ENGLISH_ABBREVIATIONS {
            table.insert_whole(abbreviation);
        }
        for stem in NEGATED_STEMS {
            table.insert_split(&[*stem, "n't"]);
            let capitalized = capitalize(stem);
            table.insert_split(&[capitalized.as_str(), "n't"]);
        }
        for words in SPLIT_WORDS {
            table.insert_split(words);
            let first = capitalize(words[0]);
            let mut capitalized: Vec<&str> = vec![&first];
            capitalized.extend_from_slice(&words[1..]);
            table.insert_split(&capitalized);
        }
        table
    }

    /// Check that every entry can be emitted as tokens of its own key.
    pub fn validate(&self) -> Result<(), BuildError> {
        for (key, tokens) in &self.entries {
            let reason = if key.is_empty() {
                Some("key is empty")
            } else if key.chars().any(char::is_whitespace) {
                Some("key contains whitespace")
            } else if tokens.iter().any(String::is_empty) {
                Some("contains an empty token")
            } else if tokens.concat() != *key {
                Some("tokens do not spell out the key")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(BuildError::InvalidException {
                    key: key.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for ExceptionTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn merge_keeps_defaults_and_prefers_additions() {
        let default: ExceptionTable = [
            ("no.", tokens(&["no", "."])),
            ("etc.", tokens(&["etc."])),
        ]
        .into_iter()
        .collect();
        let additions: ExceptionTable = [("no.", tokens(&["no."]))].into_iter().collect();

        let merged = ExceptionTable::merge(&default, &additions);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("no."), Some(&tokens(&["no."])[..]));
        assert_eq!(merged.get("etc."), Some(&tokens(&["etc."])[..]));
        // inputs are untouched
        assert_eq!(default.get("no."), Some(&tokens(&["no", "."])[..]));
    }

    #[test]
    fn scientific_table_has_case_variants() {
        let table = ExceptionTable::scientific();
        for key in ["Fig.", "fig.", "Figs.", "Eq.", "eqs.", "Sec.", "No.", "nos.", "al."] {
            assert_eq!(table.get(key), Some(&tokens(&[key])[..]), "{key}");
        }
    }

    #[test]
    fn scientific_possessives_split_in_two() {
        let table = ExceptionTable::scientific();
        assert_eq!(table.get("al.'s"), Some(&tokens(&["al.", "'s"])[..]));
        assert_eq!(table.get("Fig.’s"), Some(&tokens(&["Fig.", "’s"])[..]));
    }

    #[test]
    fn english_contractions() {
        let table = ExceptionTable::english();
        assert_eq!(table.get("don't"), Some(&tokens(&["do", "n't"])[..]));
        assert_eq!(table.get("Can't"), Some(&tokens(&["Ca", "n't"])[..]));
        assert_eq!(table.get("Cannot"), Some(&tokens(&["Can", "not"])[..]));
        assert_eq!(table.get("e.g."), Some(&tokens(&["e.g."])[..]));
    }

    #[test]
    fn builtin_tables_validate() {
        ExceptionTable::english().validate().unwrap();
        ExceptionTable::scientific().validate().unwrap();
    }

    #[test]
    fn validate_rejects_mismatched_tokens() {
        let table: ExceptionTable = [("gonna", tokens(&["going", "to"]))].into_iter().collect();
        let err = table.validate().unwrap_err();
        assert!(matches!(err, BuildError::InvalidException { ref key, .. } if key == "gonna"));
    }

    #[test]
    fn validate_rejects_whitespace_keys() {
        let mut table = ExceptionTable::new();
        table.insert_whole("et al.");
        assert!(table.validate().is_err());
    }
}
