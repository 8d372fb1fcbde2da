//! Case-insensitive keyword matching anchored on word boundaries.
//!
//! A keyword edge made of a word character is anchored with `\b`; an edge made
//! of punctuation (`c++`, `c#`) is anchored with `\B`, which holds when the
//! neighbouring character is not a word character. Both anchors are
//! zero-width, so the fragment can be embedded in larger patterns.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Compiled matcher for one keyword.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    regex: Regex,
}

impl KeywordMatcher {
    /// Matches the keyword only as a whole word.
    pub fn whole_word(keyword: &str) -> Result<Self, regex::Error> {
        Self::build(keyword, bounded(keyword))
    }

    /// Matches the keyword at the start of a word (`master` hits `masters`).
    pub fn word_prefix(keyword: &str) -> Result<Self, regex::Error> {
        let pattern = format!("{}{}", edge_anchor(keyword.chars().next()), regex::escape(keyword));
        Self::build(keyword, pattern)
    }

    fn build(keyword: &str, pattern: String) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte range of the first occurrence.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex.find(text).map(|m| m.range())
    }
}

/// Escaped, boundary-anchored regex fragment for `keyword`.
pub fn bounded(keyword: &str) -> String {
    format!(
        "{}{}{}",
        edge_anchor(keyword.chars().next()),
        regex::escape(keyword),
        edge_anchor(keyword.chars().last())
    )
}

fn edge_anchor(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if is_word_char(c) => r"\b",
        Some(_) => r"\B",
        None => "",
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Slice of `text` spanning `radius` characters either side of `range`,
/// clamped to the text bounds.
pub fn char_window(text: &str, range: Range<usize>, radius: usize) -> &str {
    let start = text[..range.start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map_or(0, |(idx, _)| idx);
    let start = if radius == 0 { range.start } else { start };
    let end = text[range.end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(idx, _)| range.end + idx);
    &text[start..end]
}
