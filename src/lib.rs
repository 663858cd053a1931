//! stringops - lenient string helpers
//!
//! This library collects small, stateless string transformations:
//! - Bounds-safe substring and truncation
//! - Blank checks and default substitution
//! - Backslash escaping for a chosen set of control characters
//! - Random string generation
//! - XML-legal and BMP-only Unicode filtering
//! - Joining, separator concatenation and JSON-like map rendering
//! - camelCase / under_score conversion
//!
//! Invalid input maps to a default value rather than an error. Strict
//! variants that report failures are offered where a caller may need to
//! tell "empty" from "broken".

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::StringOpsConfig;
pub use crate::error::{StringOpsError, StringOpsResult};
pub use crate::utils::{
    CaseUtils, ControlSet, EscapeUtils, JoinUtils, RandomStringGenerator, RandomUtils, StringUtils,
    UnicodeUtils,
};
