//! Character class data shared by the rule catalog.
//!
//! Literal lists hold raw text and are escaped when turned into fragments.
//! Class bodies (the `ALPHA*` constants) are meant to be placed inside `[...]`.

use once_cell::sync::Lazy;

/// Punctuation split off at either edge of a span. The brackets get
/// balanced-bracket guards in the rule catalog.
pub const PUNCT: &[&str] = &[
    "…", "……", ",", ":", ";", "!", "?", "¿", "؟", "¡", "(", ")", "[", "]", "{", "}", "<", ">", "_",
    "#", "*", "&", "。", "？", "！", "，", "、", "；", "：", "～", "·", "।", "،", "؛", "٪",
];

pub const QUOTES: &[&str] = &[
    "'", "''", "\"", "”", "“", "``", "`", "‘", "´", "‘‘", "’’", "‚", ",", "„", "»", "«", "「",
    "」", "『", "』", "（", "）", "〔", "〕", "【", "】", "《", "》", "〈", "〉",
];

pub const CURRENCY: &[&str] = &["$", "£", "€", "¥", "฿", "US$", "C$", "A$", "₽", "﷼", "₴"];

pub const UNITS: &[&str] = &[
    "km", "km²", "km³", "m", "m²", "m³", "dm", "dm²", "dm³", "cm", "cm²", "cm³", "mm", "mm²", "mm³",
    "ha", "µm", "nm", "yd", "in", "ft", "kg", "g", "mg", "µg", "t", "lb", "oz", "m/s", "km/h",
    "kmh", "mph", "hPa", "Pa", "mbar", "mb", "MB", "kb", "KB", "gb", "GB", "tb", "TB", "T", "G",
    "M", "K", "%", "км", "км²", "км³", "м", "м²", "м³", "дм", "дм²", "дм³", "см", "см²", "см³",
    "мм", "мм²", "мм³", "нм", "кг", "г", "мг", "м/с", "км/ч", "кПа", "Па", "мбар", "Кб", "КБ",
    "кб", "Мб", "МБ", "мб", "Гб", "ГБ", "гб", "Тб", "ТБ", "тб",
];

/// Dash joiners split between letters. The plain ASCII hyphen is absent so
/// hyphenated compounds stay whole.
pub const HYPHENS: &[&str] = &["–", "—", "--", "---", "——", "~"];

/// Ellipses, already in fragment form.
pub const ELLIPSES: &[&str] = &[r"\.\.+", "…"];

/// Other symbols (dingbats, emoji). The degree sign is left out so that
/// temperatures such as `20°C` stay together.
pub const ICONS: &[&str] = &[r"[^\P{So}°]"];

pub const ALPHA_LOWER: &str = r"\p{Ll}";
pub const ALPHA_UPPER: &str = r"\p{Lu}";
pub const ALPHA: &str = r"\p{L}";

/// Every distinct quote character, as a class body.
pub static QUOTE_CHARS: Lazy<String> = Lazy::new(|| {
    let mut chars: Vec<char> = Vec::new();
    for c in QUOTES.iter().flat_map(|q| q.chars()).chain(std::iter::once('’')) {
        if !chars.contains(&c) {
            chars.push(c);
        }
    }
    chars.into_iter().collect()
});

/// Escapes each literal into its own fragment, keeping order.
pub fn split_chars(literals: &[&str]) -> Vec<String> {
    literals
        .iter()
        .map(|literal| fancy_regex::escape(literal).into_owned())
        .collect()
}

/// Escapes the literals and joins them into one alternation body.
pub fn merge_chars(literals: &[&str]) -> String {
    split_chars(literals).join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_escapes_meta_characters() {
        let fragments = split_chars(&["(", "US$", "kg"]);
        assert_eq!(fragments, vec![r"\(", r"US\$", "kg"]);
    }

    #[test]
    fn merge_joins_in_order() {
        assert_eq!(merge_chars(&["–", "—", "C$"]), r"–|—|C\$");
    }

    #[test]
    fn hyphen_joiners_exclude_ascii_hyphen() {
        assert!(!HYPHENS.contains(&"-"));
        assert!(HYPHENS.contains(&"—"));
    }

    #[test]
    fn quote_chars_are_unique() {
        let unique: std::collections::HashSet<char> = QUOTE_CHARS.chars().collect();
        assert_eq!(unique.len(), QUOTE_CHARS.chars().count());
        assert!(QUOTE_CHARS.contains('’'));
        assert!(QUOTE_CHARS.contains('"'));
    }
}
