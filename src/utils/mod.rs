//! String helpers grouped by concern.
//!
//! Every helper is an associated function on a zero-sized struct and every
//! one is lenient: absent or out-of-range input maps to a default value
//! (usually `""` or `false`) instead of an error. The few strict variants
//! return [`StringOpsResult`](crate::error::StringOpsResult).
//!
//! Character positions and lengths count `char`s, never bytes.

pub mod case_utils;
pub mod escape_utils;
pub mod join_utils;
pub mod random_utils;
pub mod string_utils;
pub mod unicode_utils;

pub use case_utils::CaseUtils;
pub use escape_utils::{ControlSet, EscapeUtils};
pub use join_utils::JoinUtils;
pub use random_utils::{RandomStringGenerator, RandomUtils, DEFAULT_ALPHABET};
pub use string_utils::StringUtils;
pub use unicode_utils::UnicodeUtils;

/// Escape prefix used by [`EscapeUtils`]
pub const BACKSLASH: char = '\\';

/// Word separator used by [`CaseUtils`]
pub const UNDERLINE: char = '_';

/// Number of chars in `s`
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Trim every char at or below U+0020 from both ends.
///
/// Narrower than `str::trim` for Unicode spaces, wider for ASCII control
/// characters.
pub(crate) fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
