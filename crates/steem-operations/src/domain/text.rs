//! Text helpers used to derive permlinks
//!
//! Both functions are pure. `slug` only ever emits `[a-z0-9-]`, which is
//! the character set the chain accepts for permlinks and category tags.

/// Convert free text into a URL-safe permlink token.
///
/// ASCII letters and digits are kept (lowercased). Every run of other
/// characters becomes a single `-`, and no `-` is left at either end.
/// Non-ASCII characters are treated as separators.
///
/// `slug(slug(x)) == slug(x)` for every input.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

/// Truncate `text` to at most `length` characters.
///
/// Counts characters, not bytes, so a multi-byte character is never split.
/// When the cut lands inside a word and an earlier whitespace exists, the
/// partial word is dropped. Trailing whitespace is trimmed.
pub fn limit(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(length)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];

    let cut_on_boundary = text[cut..].chars().next().map_or(true, char::is_whitespace);
    let head = if cut_on_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(idx) if idx > 0 => &head[..idx],
            _ => head,
        }
    };

    head.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("  Rust -- is   GREAT!! "), "rust-is-great");
        assert_eq!(slug("dev"), "dev");
    }

    #[test]
    fn test_slug_strips_edges_and_unicode() {
        assert_eq!(slug("--a--"), "a");
        assert_eq!(slug("日本語"), "");
        assert_eq!(slug("naïve café"), "na-ve-caf");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_slug_keeps_digits() {
        assert_eq!(slug("Top 10 Tips 2024"), "top-10-tips-2024");
    }

    #[test]
    fn test_limit_short_text_unchanged() {
        assert_eq!(limit("short title", 35), "short title");
        assert_eq!(limit("", 35), "");
    }

    #[test]
    fn test_limit_respects_word_boundary() {
        let out = limit("a very long title exceeding thirty five chars", 35);
        assert_eq!(out, "a very long title exceeding thirty");
        assert!(out.chars().count() <= 35);
    }

    #[test]
    fn test_limit_cut_on_whitespace() {
        // character after the cut is a space, nothing needs to be dropped
        let text = "abcdefghij abcdefghij abcdefghij ab cdef";
        assert_eq!(limit(text, 35), "abcdefghij abcdefghij abcdefghij ab");
    }

    #[test]
    fn test_limit_single_long_word_hard_cut() {
        let text = "x".repeat(50);
        assert_eq!(limit(&text, 35), "x".repeat(35));
    }

    #[test]
    fn test_limit_multibyte() {
        let text = "é".repeat(40);
        let out = limit(&text, 35);
        assert_eq!(out.chars().count(), 35);
    }

    #[test]
    fn test_limit_zero_length() {
        assert_eq!(limit("anything", 0), "");
    }

    proptest! {
        #[test]
        fn prop_slug_idempotent(text in ".*") {
            let once = slug(&text);
            prop_assert_eq!(slug(&once), once);
        }

        #[test]
        fn prop_slug_charset(text in ".*") {
            let out = slug(&text);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!out.starts_with('-') && !out.ends_with('-'));
            prop_assert!(!out.contains("--"));
        }

        #[test]
        fn prop_limit_never_exceeds(text in ".*", length in 0usize..64) {
            prop_assert!(limit(&text, length).chars().count() <= length);
        }

        #[test]
        fn prop_limit_is_prefix(text in "[a-z ]{0,80}", length in 1usize..64) {
            let out = limit(&text, length);
            prop_assert!(text.starts_with(&out));
        }
    }
}
