use std::sync::LazyLock;

use regex::Regex;

const BOILERPLATE_PHRASES: [&str; 7] = [
    "learn more",
    "contact us",
    "careers",
    "privacy policy",
    "terms of service",
    "subscribe",
    "read more",
];

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BOILERPLATE_PHRASES
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<String>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b({})\b", alternation)).expect("boilerplate pattern is valid")
});

/// Drops navigation boilerplate from scraped text. Whitespace around a removed
/// phrase is kept, so "a Learn more b" becomes "a  b".
pub fn clean(raw_text: &str) -> String {
    if raw_text.is_empty() {
        return String::new();
    }

    BOILERPLATE.replace_all(raw_text, "").into_owned()
}

/// Cuts `text` to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
