//! Working-directory substitution for rendered file paths.

use std::borrow::Cow;

/// Replaces the working directory inside file paths with `"."`.
///
/// The substitution is a plain substring replace of the first occurrence,
/// not a path-component prefix match: `/work` also matches inside
/// `/tmp/work/a.js`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNormalizer {
    cwd: Option<String>,
}

impl PathNormalizer {
    /// Normalizer for the given working directory. An empty string disables
    /// substitution.
    pub fn new(cwd: impl Into<String>) -> Self {
        let cwd = cwd.into();
        Self {
            cwd: (!cwd.is_empty()).then_some(cwd),
        }
    }

    /// Normalizer that leaves every path untouched.
    pub fn identity() -> Self {
        Self { cwd: None }
    }

    pub fn cwd(&self) -> Option<&str> {
        self.cwd.as_deref()
    }

    pub fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self.cwd.as_deref() {
            Some(cwd) if path.contains(cwd) => Cow::Owned(path.replacen(cwd, ".", 1)),
            _ => Cow::Borrowed(path),
        }
    }
}
