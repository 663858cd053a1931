use std::fmt;
use tracing::debug;

use super::StringUtils;
use crate::error::{StringOpsError, StringOpsResult};

/// Joining and concatenation helpers
pub struct JoinUtils;

impl JoinUtils {
    /// Concatenate without a delimiter, skipping blank elements
    pub fn join(values: &[Option<&str>]) -> String {
        Self::concate(values, None)
    }

    /// Join the non-blank elements with `delimiter`.
    ///
    /// Absent, empty and whitespace-only elements are skipped, so no
    /// doubled, leading or trailing delimiter ever appears.
    pub fn concate(values: &[Option<&str>], delimiter: Option<&str>) -> String {
        let delimiter = delimiter.unwrap_or("");
        let capacity = values
            .iter()
            .flatten()
            .map(|value| value.len() + delimiter.len())
            .sum();

        let mut buffer = String::with_capacity(capacity);
        for value in values.iter().flatten() {
            if StringUtils::is_not_empty(*value) {
                if !buffer.is_empty() {
                    buffer.push_str(delimiter);
                }
                buffer.push_str(value);
            }
        }
        buffer
    }

    /// Append `value + separator` for every present element, then drop the
    /// final separator.
    ///
    /// Returns `None` for a blank separator or an empty slice. Unlike
    /// [`JoinUtils::concate`], empty elements are kept: only `None` is
    /// skipped.
    pub fn join_with_separator<'a, T: fmt::Display>(
        separator: impl Into<Option<&'a str>>,
        values: &[Option<T>],
    ) -> Option<String> {
        let separator = separator
            .into()
            .filter(|separator| !StringUtils::is_blank_trimmed(*separator))?;
        if values.is_empty() {
            return None;
        }

        let mut joined = String::new();
        for value in values.iter().flatten() {
            joined.push_str(&value.to_string());
            joined.push_str(separator);
        }

        if StringUtils::is_blank_trimmed(joined.as_str()) {
            return Some(joined);
        }

        joined.truncate(joined.len() - separator.len());
        Some(joined)
    }

    /// Render entries as `{"key":value,...}`.
    ///
    /// Keys and values are emitted raw: values are expected to already be
    /// JSON fragments (`"text"`, `42`, `{...}`). No entries gives `""`.
    pub fn translate_map_to_string<I, K, V>(entries: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut buffer = String::from("{");
        for (key, value) in entries {
            buffer.push('"');
            buffer.push_str(key.as_ref());
            buffer.push_str("\":");
            buffer.push_str(value.as_ref());
            buffer.push(',');
        }

        if buffer.len() == 1 {
            return String::new();
        }

        buffer.pop();
        buffer.push('}');
        buffer
    }

    /// Strict form of [`JoinUtils::translate_map_to_string`]: keys are
    /// JSON-escaped and every value must parse as JSON.
    pub fn translate_map_to_json<I, K, V>(entries: I) -> StringOpsResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut members = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.as_ref(), value.as_ref());

            if let Err(e) = serde_json::from_str::<serde_json::Value>(value) {
                debug!(key, "Rejected map value that is not a JSON fragment");
                return Err(StringOpsError::invalid_json(key, e.to_string()));
            }

            let key = serde_json::to_string(key).map_err(|e| StringOpsError::internal(e.to_string()))?;
            members.push(format!("{}:{}", key, value));
        }

        if members.is_empty() {
            return Ok(String::new());
        }

        Ok(format!("{{{}}}", members.join(",")))
    }
}
