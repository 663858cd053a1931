use super::{StringUtils, UNDERLINE};

/// camelCase <-> under_score conversion
pub struct CaseUtils;

impl CaseUtils {
    /// `updatedAt` -> `updated_at`.
    ///
    /// Every uppercase char gets an underscore in front, so a leading
    /// capital yields a leading underscore: `UserId` -> `_user_id`.
    pub fn camel_to_underline<'a>(param: impl Into<Option<&'a str>>) -> String {
        let param = match param.into() {
            Some(param) if !StringUtils::is_blank_trimmed(param) => param,
            _ => return String::new(),
        };

        let mut converted = String::with_capacity(param.len() + 4);
        for c in param.chars() {
            if c.is_uppercase() {
                converted.push(UNDERLINE);
                converted.extend(c.to_lowercase());
            } else {
                converted.push(c);
            }
        }
        converted
    }

    /// `updated_at` -> `updatedAt`.
    ///
    /// Each underscore is consumed together with the char after it, which
    /// is uppercased. A trailing underscore is dropped.
    pub fn underline_to_camel<'a>(param: impl Into<Option<&'a str>>) -> String {
        let param = match param.into() {
            Some(param) if !StringUtils::is_blank_trimmed(param) => param,
            _ => return String::new(),
        };

        let mut converted = String::with_capacity(param.len());
        let mut chars = param.chars();
        while let Some(c) = chars.next() {
            if c == UNDERLINE {
                if let Some(next) = chars.next() {
                    converted.extend(next.to_uppercase());
                }
            } else {
                converted.push(c);
            }
        }
        converted
    }
}
