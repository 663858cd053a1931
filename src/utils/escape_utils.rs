use super::BACKSLASH;

/// Sorted, deduplicated set of characters that trigger backslash escaping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    chars: Vec<char>,
}

impl ControlSet {
    /// Build a set from any char slice; the caller's slice is left alone
    pub fn new(chars: &[char]) -> Self {
        let mut chars = chars.to_vec();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }
}

impl From<&str> for ControlSet {
    fn from(chars: &str) -> Self {
        Self::new(&chars.chars().collect::<Vec<_>>())
    }
}

impl FromIterator<char> for ControlSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(&iter.into_iter().collect::<Vec<_>>())
    }
}

/// Backslash escaping for a caller-chosen set of control characters
pub struct EscapeUtils;

impl EscapeUtils {
    /// Prefix every control character in `s` with a backslash.
    ///
    /// Absent and empty input comes back as-is.
    pub fn encode(s: Option<&str>, chars: &[char]) -> Option<String> {
        Self::encode_with(s, &ControlSet::new(chars))
    }

    pub fn encode_with(s: Option<&str>, set: &ControlSet) -> Option<String> {
        let s = s?;
        if s.is_empty() {
            return Some(String::new());
        }

        let mut encoded = String::with_capacity(s.len() + 10);
        for c in s.chars() {
            if set.contains(c) {
                encoded.push(BACKSLASH);
            }
            encoded.push(c);
        }
        Some(encoded)
    }

    /// Drop each backslash that directly precedes a control character.
    ///
    /// Scans left to right without skipping: in `\\,` with `,` as control,
    /// only the second backslash is removed. A trailing backslash is kept.
    pub fn decode(s: Option<&str>, chars: &[char]) -> Option<String> {
        Self::decode_with(s, &ControlSet::new(chars))
    }

    pub fn decode_with(s: Option<&str>, set: &ControlSet) -> Option<String> {
        Self::decode_matching(s, |c| set.contains(c))
    }

    /// Single control character form of [`EscapeUtils::decode`]
    pub fn decode_char(s: Option<&str>, control: char) -> Option<String> {
        Self::decode_matching(s, |c| c == control)
    }

    fn decode_matching(s: Option<&str>, is_control: impl Fn(char) -> bool) -> Option<String> {
        let s = s?;

        let mut decoded = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            let escapes_next = c == BACKSLASH && chars.peek().map_or(false, |&next| is_control(next));
            if !escapes_next {
                decoded.push(c);
            }
        }
        Some(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_set_sorts_and_dedups() {
        let set = ControlSet::new(&['|', ',', '|', ';']);
        assert_eq!(set, ControlSet::new(&[',', ';', '|']));
        assert!(set.contains('|'));
        assert!(!set.contains('a'));
        assert_eq!(ControlSet::from("|,;"), set);
        assert_eq!(";,|".chars().collect::<ControlSet>(), set);
    }

    #[test]
    fn test_caller_slice_untouched() {
        let chars = ['|', ','];
        let _ = EscapeUtils::encode(Some("a|b"), &chars);
        assert_eq!(chars, ['|', ',']);
    }

    #[test]
    fn test_encode() {
        assert_eq!(EscapeUtils::encode(Some("a,b|c"), &[',', '|']), Some(r"a\,b\|c".to_string()));
        assert_eq!(EscapeUtils::encode(Some("plain"), &[',']), Some("plain".to_string()));
        assert_eq!(EscapeUtils::encode(Some(""), &[',']), Some(String::new()));
        assert_eq!(EscapeUtils::encode(None, &[',']), None);
        assert_eq!(EscapeUtils::encode(Some("a,b"), &[]), Some("a,b".to_string()));
    }

    #[test]
    fn test_decode() {
        assert_eq!(EscapeUtils::decode(Some(r"a\,b\|c"), &[',', '|']), Some("a,b|c".to_string()));
        assert_eq!(EscapeUtils::decode(Some(r"a\nb"), &[',']), Some(r"a\nb".to_string()));
        assert_eq!(EscapeUtils::decode(None, &[',']), None);
    }

    #[test]
    fn test_decode_trailing_backslash_kept() {
        assert_eq!(EscapeUtils::decode(Some(r"abc\"), &['\\']), Some(r"abc\".to_string()));
        assert_eq!(EscapeUtils::decode_char(Some(r"abc\"), ','), Some(r"abc\".to_string()));
    }

    #[test]
    fn test_decode_does_not_skip() {
        assert_eq!(EscapeUtils::decode_char(Some(r"\\,"), ','), Some(r"\,".to_string()));
        // with backslash itself in the set every backslash before another is dropped
        assert_eq!(EscapeUtils::decode(Some(r"\\\\"), &['\\']), Some(r"\".to_string()));
    }

    #[test]
    fn test_round_trip() {
        let set = ControlSet::from(",;|");
        for s in ["a,b;c|d", ",,,", "no controls", "", "日本,語", "trailing|"] {
            let encoded = EscapeUtils::encode_with(Some(s), &set);
            let decoded = EscapeUtils::decode_with(encoded.as_deref(), &set);
            assert_eq!(decoded.as_deref(), Some(s));
        }
    }

    #[test]
    fn test_round_trip_survives_escaped_input() {
        let set = ControlSet::from(",");
        let encoded = EscapeUtils::encode_with(Some(r"a\,b"), &set);
        assert_eq!(encoded.as_deref(), Some(r"a\\,b"));
        let decoded = EscapeUtils::decode_with(encoded.as_deref(), &set);
        assert_eq!(decoded.as_deref(), Some(r"a\,b"));
    }

    #[test]
    fn test_round_trip_breaks_when_backslash_is_control() {
        let set = ControlSet::from("\\");
        let encoded = EscapeUtils::encode_with(Some(r"\\"), &set);
        assert_eq!(encoded.as_deref(), Some(r"\\\\"));
        let decoded = EscapeUtils::decode_with(encoded.as_deref(), &set);
        assert_eq!(decoded.as_deref(), Some(r"\"));
    }
}
