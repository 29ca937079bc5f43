//! Splitting text into highlighted and plain spans for rendering.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

impl HighlightTextSpan {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_highlighted: false, index: 0 }
    }
}

/// Escapes regex metacharacters so user input is matched literally.
pub fn escape_pattern(query: &str) -> String {
    regex::escape(query)
}

/// Marks every case-insensitive, non-overlapping occurrence of `query` in
/// `text`. Only literal substrings are marked; subsequence matches are not.
///
/// Returns the text as a single plain span when the query is blank or never
/// occurs. Highlighted spans are numbered from 0 in `index`.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightTextSpan> {
    let query = query.trim();
    if query.is_empty() {
        return vec![HighlightTextSpan::plain(text)];
    }
    let pattern = match RegexBuilder::new(&escape_pattern(query)).case_insensitive(true).build() {
        Ok(pattern) => pattern,
        Err(_) => return vec![HighlightTextSpan::plain(text)],
    };

    let mut spans = Vec::new();
    let mut last_end = 0;
    let mut index = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last_end {
            spans.push(HighlightTextSpan::plain(&text[last_end..found.start()]));
        }
        spans.push(HighlightTextSpan { text: found.as_str().to_string(), is_highlighted: true, index });
        index += 1;
        last_end = found.end();
    }
    if spans.is_empty() {
        return vec![HighlightTextSpan::plain(text)];
    }
    if last_end < text.len() {
        spans.push(HighlightTextSpan::plain(&text[last_end..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[HighlightTextSpan]) -> Vec<(&str, bool)> {
        spans.iter().map(|s| (s.text.as_str(), s.is_highlighted)).collect()
    }

    #[test]
    fn blank_query_returns_text_unsegmented() {
        assert_eq!(texts(&highlight("Alex Rao", "")), vec![("Alex Rao", false)]);
        assert_eq!(texts(&highlight("Alex Rao", "  ")), vec![("Alex Rao", false)]);
    }

    #[test]
    fn marks_all_occurrences_preserving_case() {
        let spans = highlight("Alex and ALbert", "al");
        assert_eq!(texts(&spans), vec![("Al", true), ("ex and ", false), ("AL", true), ("bert", false)]);
        assert_eq!(spans[0].index, 0);
        assert_eq!(spans[2].index, 1);
    }

    #[test]
    fn subsequence_is_never_highlighted() {
        assert_eq!(texts(&highlight("abc", "ac")), vec![("abc", false)]);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(texts(&highlight("aaaa", "aa")), vec![("aa", true), ("aa", true)]);
        assert_eq!(texts(&highlight("aaa", "aa")), vec![("aa", true), ("a", false)]);
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(texts(&highlight("price (a+b)*", "(a+b)*")), vec![("price ", false), ("(a+b)*", true)]);
        assert_eq!(texts(&highlight("abc", ".*")), vec![("abc", false)]);
        assert_eq!(texts(&highlight("a[b]c", "[")), vec![("a", false), ("[", true), ("b]c", false)]);
    }

    #[test]
    fn escape_pattern_quotes_metacharacters() {
        assert_eq!(escape_pattern("a.b"), r"a\.b");
        assert_eq!(escape_pattern("(x)*"), r"\(x\)\*");
        assert_eq!(escape_pattern("plain"), "plain");
    }

    #[test]
    fn empty_text() {
        assert_eq!(texts(&highlight("", "al")), vec![("", false)]);
    }
}
