//! Binary severity classification for rendered diagnostics.

use std::fmt;

/// Severity code that marks a diagnostic as an error.
pub const ERROR_CODE: i64 = 2;

/// The severity word a diagnostic line starts with.
///
/// Only two levels exist in the error-list vocabulary. Ordered from least to
/// most severe, matching the derived `PartialOrd`/`Ord`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    /// Anything that is neither fatal nor severity `2`.
    Warning,
    /// Fatal diagnostics and severity `2`.
    Error,
}

impl Severity {
    /// Classify a diagnostic from its `fatal` flag and numeric severity.
    ///
    /// `fatal` wins over any severity value; otherwise only `2` is an error.
    pub fn classify(fatal: Option<bool>, severity: Option<i64>) -> Self {
        if fatal.unwrap_or(false) || severity == Some(ERROR_CODE) {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
