//! Snapshot tests over short passages of scientific text.

use scitok::{remove_line_wrap_hyphens, Token, Tokenizer};

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn tokenize(input: &str) -> String {
    let tokenizer = Tokenizer::scientific().expect("standard tokenizer builds");
    render(&tokenizer.tokenize(input))
}

#[test]
fn test_methods_sentence() {
    insta::assert_snapshot!(
        tokenize("Samples (see Fig. 3) were stored at 20°C."),
        @"Samples | ( | see | Fig. | 3 | ) | were | stored | at | 20°C | ."
    );
}

#[test]
fn test_units_and_dashes() {
    insta::assert_snapshot!(
        tokenize("Each 5kg batch—well-known—cost $100."),
        @"Each | 5 | kg | batch | — | well-known | — | cost | $ | 100 | ."
    );
}

#[test]
fn test_citation() {
    insta::assert_snapshot!(
        tokenize("As in Smith et al.'s model, e.g. cells.The"),
        @"As | in | Smith | et | al. | 's | model | , | e.g. | cells | . | The"
    );
}

#[test]
fn test_dehyphenated_passage() {
    let text = remove_line_wrap_hyphens("hydro-\ngen and oxy- \ngen");
    insta::assert_snapshot!(tokenize(&text), @"hydrogen | and | oxygen");
}
