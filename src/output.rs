//! Writing a rendered report to stdout or a file.
//!
//! Stdout gets the report followed by a newline and is styled per the color
//! policy. Files get the exact plain text, never styled.

use crate::error::{ErrlistError, Result};
use crate::report::Report;
use crate::utils::ColorChoice;
use std::fs;
use std::path::Path;

/// Text destined for stdout.
pub fn compose_stdout(report: &Report, color: bool) -> String {
    report.paint(color)
}

pub fn print_report(report: &Report, color: ColorChoice) {
    println!("{}", compose_stdout(report, color.for_stdout()));
}

/// Write the plain report to `path`, creating parent directories.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ErrlistError::io(parent, e))?;
    }
    fs::write(path, report.to_plain_string()).map_err(|e| ErrlistError::io(path, e))
}
