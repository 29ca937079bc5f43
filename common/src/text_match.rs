//! Case-insensitive substring matching with an ordered-subsequence fallback.

/// Returns true when `query` occurs in `text` ignoring case, or when the
/// query's characters appear in `text` in order (not necessarily adjacent).
///
/// A blank query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let text = text.to_lowercase();
    if text.contains(&query) {
        return true;
    }
    is_subsequence(&text, &query)
}

fn is_subsequence(text: &str, query: &str) -> bool {
    let mut wanted = query.chars().peekable();
    for ch in text.chars() {
        if wanted.peek() == Some(&ch) {
            wanted.next();
        }
        if wanted.peek().is_none() {
            return true;
        }
    }
    false
}

/// True when any of `fields` matches `query`.
pub fn matches_any<S: AsRef<str>>(fields: &[S], query: &str) -> bool {
    fields.iter().any(|field| matches(field.as_ref(), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches("anything", ""));
        assert!(matches("", ""));
        assert!(matches("", "   "));
    }

    #[test]
    fn substring_is_case_insensitive() {
        assert!(matches("Alex Rao", "al"));
        assert!(matches("Alex Rao", "RAO"));
        assert!(matches("Mumbai", " mum "));
    }

    #[test]
    fn ordered_subsequence_fallback() {
        assert!(matches("photography", "ptgy"));
        assert!(!matches("photography", "ygtp"));
        assert!(matches("abc", "ac"));
    }

    #[test]
    fn empty_text_only_matches_blank_query() {
        assert!(!matches("", "a"));
    }

    #[test]
    fn non_ascii_text() {
        assert!(matches("Bengaluru Café", "CAFÉ"));
        assert!(matches("Bengaluru Café", "bgé"));
    }

    #[test]
    fn any_field() {
        assert!(matches_any(&["Delhi", "studio"], "stu"));
        assert!(!matches_any(&["Delhi", "studio"], "zz"));
        assert!(!matches_any::<&str>(&[], "zz"));
    }
}
