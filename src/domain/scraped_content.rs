use std::fmt;

use super::text_cleaner::truncate_chars;

pub const MAX_CONTENT_CHARS: usize = 3000;

/// Visible text scraped from a site, never longer than [`MAX_CONTENT_CHARS`].
/// An empty value means nothing usable was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedContent(String);

impl ScrapedContent {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        match truncate_chars(&text, MAX_CONTENT_CHARS).len() {
            len if len == text.len() => ScrapedContent(text),
            len => ScrapedContent(text[..len].to_string()),
        }
    }

    pub fn empty() -> Self {
        ScrapedContent(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ScrapedContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScrapedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
