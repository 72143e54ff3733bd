//! Errlist core library.
//!
//! Renders static-analysis results, grouped by file, as a Visual Studio
//! compatible error list that the IDE's error-list pane can parse.
//!
//! High-level modules:
//! - `report`: The renderer (text layout plus optional ANSI decoration).
//! - `severity`: Error/warning classification.
//! - `paths`: Working-directory substitution in file paths.
//! - `models`: Input records and the derived summary.
//! - `input`: Loading ESLint-style JSON results from files, globs, or stdin.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Writing reports to stdout or files.
//! - `error`: Shared error type.
//! - `utils`: Color policy, stderr prefixes, logging setup.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod paths;
pub mod report;
pub mod severity;
pub mod utils;

pub use error::ErrlistError;
pub use models::{Diagnostic, FileResult, Summary};
pub use paths::PathNormalizer;
pub use report::{render, render_report, Report};
pub use severity::Severity;
