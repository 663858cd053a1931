use tracing::warn;

use super::{trim_control, StringUtils};
use crate::error::{StringOpsError, StringOpsResult};

/// Code point and byte level Unicode filters
pub struct UnicodeUtils;

impl UnicodeUtils {
    /// Whether the code point is a legal XML 1.0 character (plus NUL)
    pub fn is_xml_char(c: char) -> bool {
        matches!(
            c as u32,
            0x0 | 0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
        )
    }

    /// Keep only XML-legal code points.
    ///
    /// Blank input (see [`StringUtils::is_empty`]) is returned unchanged,
    /// including whitespace such as U+000B that the filter would drop.
    pub fn escape_emoji(source: &str) -> String {
        if StringUtils::is_empty(source) {
            return source.to_string();
        }

        source.chars().filter(|&c| Self::is_xml_char(c)).collect()
    }

    /// [`UnicodeUtils::escape_emoji`] over UTF-16 code units.
    ///
    /// Surrogate pairs are combined before filtering; lone surrogates are
    /// dropped.
    pub fn escape_emoji_utf16(units: &[u16]) -> String {
        let decoded: String = char::decode_utf16(units.iter().copied())
            .filter_map(Result::ok)
            .collect();

        Self::escape_emoji(&decoded)
    }

    /// Strip every char outside the BMP (4-byte UTF-8) and trim the result
    pub fn filter_off_utf8mb4(text: &str) -> String {
        Self::filter_off_utf8mb4_bytes(text.as_bytes())
    }

    /// Lenient byte form: malformed input yields `""`
    pub fn filter_off_utf8mb4_bytes(bytes: &[u8]) -> String {
        match Self::try_filter_off_utf8mb4(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Discarding malformed UTF-8 input");
                String::new()
            }
        }
    }

    /// Walk the encoded bytes, copying 1-3 byte sequences and skipping
    /// 4-byte ones. Chars at or below U+0020 are trimmed from both ends of
    /// the result.
    pub fn try_filter_off_utf8mb4(bytes: &[u8]) -> StringOpsResult<String> {
        let mut kept = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            let width = match bytes[i] {
                0x00..=0x7F => 1,
                0xC0..=0xDF => 2,
                0xE0..=0xEF => 3,
                0xF0..=0xF4 => 4,
                lead => {
                    return Err(StringOpsError::malformed_utf8(
                        i,
                        format!("invalid lead byte 0x{:02X}", lead),
                    ))
                }
            };

            let end = i + width;
            if end > bytes.len() {
                return Err(StringOpsError::malformed_utf8(
                    i,
                    format!("truncated {}-byte sequence", width),
                ));
            }

            // skipped 4-byte runs are validated too
            let sequence = &bytes[i..end];
            std::str::from_utf8(sequence)
                .map_err(|e| StringOpsError::malformed_utf8(i, e.to_string()))?;
            if width < 4 {
                kept.extend_from_slice(sequence);
            }

            i = end;
        }

        let text = String::from_utf8(kept)
            .map_err(|e| StringOpsError::malformed_utf8(e.utf8_error().valid_up_to(), e.to_string()))?;

        Ok(trim_control(&text).to_string())
    }
}
