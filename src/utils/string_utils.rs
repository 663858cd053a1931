use super::{char_len, trim_control};

/// String utility functions
pub struct StringUtils;

impl StringUtils {
    /// Char-indexed substring with lenient bounds.
    ///
    /// Returns `""` for an absent source or `size == 0`. When
    /// `offset + size` reaches or passes the source length the whole source
    /// comes back untouched, so `size` is not a hard cap. Otherwise `size`
    /// acts as the exclusive end index: `substring("abcdef", 2, 3) == "c"`,
    /// and `offset >= size` yields `""`.
    pub fn substring<'a>(source: impl Into<Option<&'a str>>, offset: usize, size: usize) -> String {
        let source = match source.into() {
            Some(source) if size >= 1 => source,
            _ => return String::new(),
        };

        if char_len(source) <= offset.saturating_add(size) {
            return source.to_string();
        }

        if offset >= size {
            return String::new();
        }

        source.chars().skip(offset).take(size - offset).collect()
    }

    /// First `size` chars of the source, see [`StringUtils::substring`]
    pub fn prefix<'a>(source: impl Into<Option<&'a str>>, size: usize) -> String {
        Self::substring(source, 0, size)
    }

    /// Truncate to `size` chars and append `suffix` only if anything was cut.
    ///
    /// A `None` size keeps the whole source.
    pub fn truncate<'a>(source: impl Into<Option<&'a str>>, size: Option<usize>, suffix: &str) -> String {
        let Some(source) = source.into() else {
            return String::new();
        };

        let source_len = char_len(source);
        let mut truncated = Self::prefix(source, size.unwrap_or(source_len));
        if char_len(&truncated) < source_len {
            truncated.push_str(suffix);
        }
        truncated
    }

    /// Absent, zero-length or whitespace only
    pub fn is_empty<'a>(value: impl Into<Option<&'a str>>) -> bool {
        value.into().map_or(true, |s| s.chars().all(char::is_whitespace))
    }

    pub fn is_not_empty<'a>(value: impl Into<Option<&'a str>>) -> bool {
        !Self::is_empty(value)
    }

    /// True when the slice is non-empty and every element is present and
    /// has at least one char. Whitespace-only elements pass.
    pub fn all_not_empty(values: &[Option<&str>]) -> bool {
        !values.is_empty() && values.iter().all(|value| matches!(value, Some(s) if !s.is_empty()))
    }

    pub fn null_to_empty(value: Option<&str>) -> &str {
        value.unwrap_or("")
    }

    /// Fallback for absent or zero-length values (not whitespace-aware)
    pub fn empty_to_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
        match value {
            Some(s) if !s.is_empty() => s,
            _ => default,
        }
    }

    /// Absent, or empty once chars at or below U+0020 are trimmed
    pub fn is_blank_trimmed<'a>(value: impl Into<Option<&'a str>>) -> bool {
        value.into().map_or(true, |s| trim_control(s).is_empty())
    }

    /// Does `sub` occur in `source` at or after char index `offset`?
    ///
    /// A blank source never matches. An offset past the end never matches,
    /// even for an empty `sub`.
    pub fn contains<'a>(source: impl Into<Option<&'a str>>, sub: &str, offset: usize) -> bool {
        let source = match source.into() {
            Some(source) if Self::is_not_empty(source) => source,
            _ => return false,
        };

        let start = match source.char_indices().nth(offset) {
            Some((index, _)) => index,
            None if offset == char_len(source) => source.len(),
            None => return false,
        };

        source[start..].contains(sub)
    }

    /// Lowercase and trim
    pub fn normalize<'a>(value: impl Into<Option<&'a str>>) -> String {
        match value.into() {
            Some(s) if Self::is_not_empty(s) => trim_control(&s.to_lowercase()).to_string(),
            _ => String::new(),
        }
    }

    /// Wrap in `%` wildcards for a SQL `LIKE` clause
    pub fn sql_like<'a>(value: impl Into<Option<&'a str>>) -> String {
        match value.into() {
            Some(s) if Self::is_not_empty(s) => format!("%{}%", s),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_bounds() {
        assert_eq!(StringUtils::substring(None, 0, 3), "");
        assert_eq!(StringUtils::substring("hello", 0, 0), "");
        assert_eq!(StringUtils::substring("hello", 0, 3), "hel");
        assert_eq!(StringUtils::substring("hello", 0, 5), "hello");
        assert_eq!(StringUtils::substring("hello", 0, 9), "hello");
    }

    #[test]
    fn test_substring_with_offset() {
        // offset + size past the end returns everything
        assert_eq!(StringUtils::substring("hello", 2, 3), "hello");
        assert_eq!(StringUtils::substring("hello", 4, 30), "hello");
        // otherwise size is the end index
        assert_eq!(StringUtils::substring("abcdef", 2, 3), "c");
        assert_eq!(StringUtils::substring("abcdefgh", 1, 4), "bcd");
        assert_eq!(StringUtils::substring("abcdefgh", 3, 2), "");
        assert_eq!(StringUtils::substring("abcdefgh", usize::MAX, 2), "abcdefgh");
    }

    #[test]
    fn test_substring_counts_chars() {
        assert_eq!(StringUtils::substring("日本語テキスト", 0, 3), "日本語");
        assert_eq!(StringUtils::substring("a😀bc", 1, 2), "😀");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(StringUtils::truncate(None, Some(3), "..."), "");
        assert_eq!(StringUtils::truncate("hello world", Some(5), "..."), "hello...");
        assert_eq!(StringUtils::truncate("hello", Some(5), "..."), "hello");
        assert_eq!(StringUtils::truncate("hello", Some(50), "..."), "hello");
        assert_eq!(StringUtils::truncate("hello", None, "..."), "hello");
        assert_eq!(StringUtils::truncate("hello", Some(0), "..."), "...");
    }

    #[test]
    fn test_truncate_exact_cutover() {
        let source = "abcdef";
        assert_eq!(StringUtils::truncate(source, Some(6), "~"), "abcdef");
        assert_eq!(StringUtils::truncate(source, Some(5), "~"), "abcde~");
    }

    #[test]
    fn test_truncate_never_changes_short_input() {
        for source in ["", "a", "hello", "日本語", "tab\there"] {
            for extra in 0..4 {
                let size = char_len(source) + extra;
                assert_eq!(StringUtils::truncate(source, Some(size), "..."), source);
            }
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(StringUtils::is_empty(""));
        assert!(StringUtils::is_empty("   "));
        assert!(StringUtils::is_empty(" \t\r\n\u{3000}"));
        assert!(StringUtils::is_empty(None));
        assert!(!StringUtils::is_empty("a"));
        assert!(!StringUtils::is_empty("  a  "));
        assert!(StringUtils::is_not_empty("a"));
        assert!(!StringUtils::is_not_empty(" "));
    }

    #[test]
    fn test_is_empty_uses_unicode_whitespace() {
        assert!(StringUtils::is_empty("\u{a0}"));
        assert!(!StringUtils::is_empty("\u{1f}"));
    }

    #[test]
    fn test_all_not_empty() {
        assert!(!StringUtils::all_not_empty(&[]));
        assert!(!StringUtils::all_not_empty(&[Some("a"), None]));
        assert!(!StringUtils::all_not_empty(&[Some("a"), Some("")]));
        assert!(StringUtils::all_not_empty(&[Some("a"), Some("b")]));
        // raw length check, not the whitespace-aware one
        assert!(StringUtils::all_not_empty(&[Some(" "), Some("b")]));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StringUtils::null_to_empty(None), "");
        assert_eq!(StringUtils::null_to_empty(Some(" x ")), " x ");
        assert_eq!(StringUtils::empty_to_default(None, "def"), "def");
        assert_eq!(StringUtils::empty_to_default(Some(""), "def"), "def");
        assert_eq!(StringUtils::empty_to_default(Some("  "), "def"), "  ");
        assert_eq!(StringUtils::empty_to_default(Some("value"), "def"), "value");
    }

    #[test]
    fn test_is_blank_trimmed() {
        assert!(StringUtils::is_blank_trimmed(None));
        assert!(StringUtils::is_blank_trimmed(" \t\u{1}"));
        assert!(!StringUtils::is_blank_trimmed("\u{3000}"));
        assert!(!StringUtils::is_blank_trimmed(" _ "));
    }

    #[test]
    fn test_contains() {
        assert!(StringUtils::contains("hello world", "world", 0));
        assert!(StringUtils::contains("hello world", "world", 6));
        assert!(!StringUtils::contains("hello world", "world", 7));
        assert!(!StringUtils::contains("hello world", "hello", 1));
        assert!(!StringUtils::contains("hello", "Hello", 0));
        assert!(!StringUtils::contains("   ", " ", 0));
        assert!(!StringUtils::contains(None, "a", 0));
    }

    #[test]
    fn test_contains_offset_edges() {
        assert!(StringUtils::contains("abc", "", 3));
        assert!(!StringUtils::contains("abc", "", 4));
        assert!(StringUtils::contains("日本語", "語", 2));
        assert!(!StringUtils::contains("日本語", "本", 2));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(StringUtils::normalize("  Hello World  "), "hello world");
        assert_eq!(StringUtils::normalize("   "), "");
        assert_eq!(StringUtils::normalize(None), "");
    }

    #[test]
    fn test_normalize_trims_control_chars_only() {
        assert_eq!(StringUtils::normalize("\u{1}Ab"), "ab");
        assert_eq!(StringUtils::normalize("\u{3000}Ab"), "\u{3000}ab");
    }

    #[test]
    fn test_sql_like() {
        assert_eq!(StringUtils::sql_like("x"), "%x%");
        assert_eq!(StringUtils::sql_like(" x "), "% x %");
        assert_eq!(StringUtils::sql_like(""), "");
        assert_eq!(StringUtils::sql_like("  "), "");
        assert_eq!(StringUtils::sql_like(None), "");
    }
}
