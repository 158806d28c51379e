//! Property-based tests for the tokenizer and the line-wrap clean-up.
//!
//! Inputs mix words, numbers, units, brackets and punctuation so that every
//! rule family gets exercised, plus arbitrary printable text for robustness.

use proptest::prelude::*;
use scitok::{detokenize, remove_line_wrap_hyphens, Tokenizer};

fn tokenizer() -> &'static Tokenizer {
    use std::sync::OnceLock;
    static TOKENIZER: OnceLock<Tokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| Tokenizer::scientific().expect("standard tokenizer builds"))
}

fn scientific_text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        "[a-zA-Z]{1,8}",
        "[0-9]{1,4}",
        "[0-9]{1,3}(kg|mg|ml|°C|%)",
        Just("Fig.".to_string()),
        Just("et al.'s".to_string()),
        Just("e.g.".to_string()),
        Just("don't".to_string()),
        "[(\\[][a-z0-9]{1,5}[)\\]][a-z]{0,3}",
        "[a-z]{1,5}[-—,.:][a-zA-Z]{1,5}",
        "[\"“'][a-z]{1,6}[\"”']?[.,;]?",
    ];
    let gap = prop_oneof!["[ ]{1,3}", Just("\n".to_string()), Just("\t".to_string())];
    (prop::collection::vec((word, gap), 0..12), "[ \n]{0,2}").prop_map(|(parts, lead)| {
        let mut text = lead;
        for (word, gap) in parts {
            text.push_str(&word);
            text.push_str(&gap);
        }
        text
    })
}

proptest! {
    #[test]
    fn test_tokenize_never_panics(input in "\\PC{0,60}") {
        let _ = tokenizer().tokenize(&input);
    }

    #[test]
    fn test_detokenize_restores_input(input in scientific_text_strategy()) {
        let tokens = tokenizer().tokenize(&input);
        prop_assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_detokenize_restores_arbitrary_input(input in "\\PC{0,40}") {
        let tokens = tokenizer().tokenize(&input);
        prop_assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_detokenize_restores_whitespace_runs(input in "[ \t\n]{0,6}([a-z(.]{1,5}[ \t\n]{1,4}){0,4}") {
        let tokens = tokenizer().tokenize(&input);
        let leading_len = input.len() - input.trim_start().len();
        prop_assert_eq!(tokens.leading_whitespace, &input[..leading_len]);
        prop_assert_eq!(detokenize(&tokens), input);
    }

    #[test]
    fn test_tokens_are_nonempty_slices_in_order(input in scientific_text_strategy()) {
        let tokens = tokenizer().tokenize(&input);
        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
            prop_assert!(!token.text.chars().any(char::is_whitespace));
            prop_assert_eq!(&input[token.span.clone()], token.text);
            prop_assert!(token.start() >= previous_end);
            previous_end = token.end();
        }
    }

    #[test]
    fn test_remove_line_wrap_hyphens_is_idempotent(input in "[a-z\\- \n]{0,40}") {
        let once = remove_line_wrap_hyphens(&input);
        prop_assert_eq!(remove_line_wrap_hyphens(&once), once.clone());
    }

    #[test]
    fn test_remove_line_wrap_hyphens_only_deletes(input in "[a-z\\- \n]{0,40}") {
        let cleaned = remove_line_wrap_hyphens(&input);
        let letters: String = input.chars().filter(char::is_ascii_lowercase).collect();
        let kept: String = cleaned.chars().filter(char::is_ascii_lowercase).collect();
        prop_assert_eq!(kept, letters);
        prop_assert!(cleaned.len() <= input.len());
    }
}

#[test]
fn test_every_exception_key_yields_its_tokens() {
    let tokenizer = tokenizer();
    for (key, expected) in tokenizer.exceptions().iter() {
        let tokens: Vec<&str> = tokenizer.tokenize(key).iter().map(|t| t.text).collect();
        assert_eq!(tokens, expected, "{key}");
    }
}

#[test]
fn test_shared_across_threads() {
    let tokenizer = tokenizer();
    let inputs = ["(see Fig. 3)", "5kg of H3g.", "model — result", "don't"];
    let expected: Vec<usize> = inputs.iter().map(|i| tokenizer.tokenize(i).len()).collect();
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || tokenizer.tokenize(input).len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts, expected);
}
