//! Text clean-up applied before tokenizing.

/// Hyphen and line break combinations left behind by hard-wrapped text,
/// longest first so a blank line after a hyphen goes with it.
const LINE_WRAP_HYPHENS: [&str; 4] = ["-\n\n", "- \n\n", "-\n", "- \n"];

/// Rejoin words hyphenated across a line break.
///
/// Every occurrence of each sequence in [`LINE_WRAP_HYPHENS`] is removed, in
/// that order. A removal can join text into a fresh occurrence, so the passes
/// repeat until the text stops changing. Nothing else is touched.
pub fn remove_line_wrap_hyphens(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    LINE_WRAP_HYPHENS
        .iter()
        .fold(text.to_string(), |acc, pattern| acc.replace(pattern, ""))
}
