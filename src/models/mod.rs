//! Input data model for analysis results and the derived summary.
//!
//! Field names follow the ESLint JSON results shape (`filePath`, `ruleId`),
//! so result documents deserialize directly. Unknown fields are ignored.

use crate::severity::Severity;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One analyzed source file and its diagnostics, in reporting order.
pub struct FileResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single finding within a file.
pub struct Diagnostic {
    pub message: String,
    #[serde(default)]
    pub severity: Option<i64>,
    #[serde(default)]
    pub fatal: Option<bool>,
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl FileResult {
    pub fn new(file_path: impl Into<String>, messages: Vec<Diagnostic>) -> Self {
        Self {
            file_path: file_path.into(),
            messages,
        }
    }
}

impl Diagnostic {
    /// A diagnostic with only a message; everything else absent.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: i64) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn fatal(mut self) -> Self {
        self.fatal = Some(true);
        self
    }

    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn level(&self) -> Severity {
        Severity::classify(self.fatal, self.severity)
    }

    /// Rule id token; empty when absent.
    pub fn rule_token(&self) -> &str {
        self.rule_id.as_deref().unwrap_or("")
    }

    /// `(line, column)` with absent values as `0`.
    pub fn position(&self) -> (u32, u32) {
        (self.line.unwrap_or(0), self.column.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Aggregated counts across a result set.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    /// Files with at least one diagnostic.
    pub files: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_results(results: &[FileResult]) -> Self {
        let mut summary = Summary::default();
        for result in results {
            if !result.messages.is_empty() {
                summary.files += 1;
            }
            for message in &result.messages {
                match message.level() {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                }
            }
            summary.total += result.messages.len();
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
