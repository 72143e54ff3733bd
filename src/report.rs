//! Visual Studio error-list report rendering.
//!
//! Layout, per file with at least one diagnostic:
//!
//! ```text
//!
//!
//! ./src/a.js - 2
//! error: Unexpected foo. foo ./src/a.js:5,10
//! warning: Unexpected bar. bar ./src/a.js:6,11
//!
//! 2 problems
//! ```
//!
//! Rendering builds a [`Report`] of tagged segments. The plain text is the
//! concatenation of the segments; [`Report::paint`] adds ANSI emphasis to
//! the severity word, rule id, and locator without touching the skeleton.

use crate::models::FileResult;
use crate::paths::PathNormalizer;
use crate::severity::Severity;
use owo_colors::OwoColorize;
use std::fmt;

/// Visual role of a piece of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Error,
    Warning,
    Rule,
    Locator,
}

impl From<Severity> for Tone {
    fn from(sev: Severity) -> Self {
        match sev {
            Severity::Error => Tone::Error,
            Severity::Warning => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tone: Tone,
    pub text: String,
}

/// A rendered report: the text skeleton with styling hints attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    segments: Vec<Segment>,
}

impl Report {
    fn push(&mut self, tone: Tone, text: impl Into<String>) {
        let text = text.into();
        if tone == Tone::Plain {
            if let Some(last) = self.segments.last_mut() {
                if last.tone == Tone::Plain {
                    last.text.push_str(&text);
                    return;
                }
            }
        }
        self.segments.push(Segment { tone, text });
    }

    pub fn to_plain_string(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Final output. With `color` off this is exactly the plain text.
    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.to_plain_string();
        }
        let mut out = String::new();
        for seg in &self.segments {
            // Empty tokens stay empty; no escape codes around nothing.
            if seg.text.is_empty() {
                continue;
            }
            let text = seg.text.as_str();
            match seg.tone {
                Tone::Plain => out.push_str(text),
                Tone::Error => out.push_str(&text.red().to_string()),
                Tone::Warning => out.push_str(&text.yellow().to_string()),
                Tone::Rule => out.push_str(&text.dimmed().to_string()),
                Tone::Locator => out.push_str(&text.cyan().to_string()),
            }
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            f.write_str(&seg.text)?;
        }
        Ok(())
    }
}

/// Render results into a [`Report`], in input order.
///
/// Files without diagnostics produce no section. The trailing summary is
/// `no problems` when nothing was reported, otherwise `N problem(s)`.
pub fn render_report(results: &[FileResult], paths: &PathNormalizer) -> Report {
    let mut report = Report::default();
    let mut total = 0usize;

    for result in results {
        let messages = &result.messages;
        let file_path = paths.normalize(&result.file_path);

        total += messages.len();

        if !messages.is_empty() {
            report.push(
                Tone::Plain,
                format!("\n\n{} - {}\n", file_path, messages.len()),
            );
        }

        for message in messages {
            let (line, column) = message.position();
            let severity = message.level();
            report.push(severity.into(), severity.as_str());
            report.push(Tone::Plain, format!(": {} ", message.message));
            report.push(Tone::Rule, message.rule_token());
            report.push(Tone::Plain, " ");
            report.push(Tone::Locator, format!("{}:{},{}", file_path, line, column));
            report.push(Tone::Plain, "\n");
        }
    }

    if total == 0 {
        report.push(Tone::Plain, "no problems");
    } else {
        let plural = if total == 1 { "" } else { "s" };
        report.push(Tone::Plain, format!("\n{} problem{}", total, plural));
    }

    report
}

/// Plain-text report for the given working directory.
pub fn render(results: &[FileResult], cwd: &str) -> String {
    render_report(results, &PathNormalizer::new(cwd)).to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diagnostic;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for n in chars.by_ref() {
                    if n == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn foo() -> Diagnostic {
        Diagnostic::new("Unexpected foo.")
            .with_severity(2)
            .at(5, 10)
            .with_rule("foo")
    }

    fn bar() -> Diagnostic {
        Diagnostic::new("Unexpected bar.")
            .with_severity(1)
            .at(6, 11)
            .with_rule("bar")
    }

    fn plain(results: &[FileResult]) -> String {
        render_report(results, &PathNormalizer::identity()).to_plain_string()
    }

    #[test]
    fn test_no_messages() {
        let results = vec![FileResult::new("foo.js", vec![])];
        assert_eq!(plain(&results), "no problems");
        assert_eq!(plain(&[]), "no problems");
    }

    #[test]
    fn test_single_error() {
        let results = vec![FileResult::new("foo.js", vec![foo()])];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 1\nerror: Unexpected foo. foo foo.js:5,10\n\n1 problem"
        );
    }

    #[test]
    fn test_single_warning() {
        let results = vec![FileResult::new("foo.js", vec![foo().with_severity(1)])];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 1\nwarning: Unexpected foo. foo foo.js:5,10\n\n1 problem"
        );
    }

    #[test]
    fn test_fatal_without_severity_is_error() {
        let mut d = foo().fatal();
        d.severity = None;
        let results = vec![FileResult::new("foo.js", vec![d])];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 1\nerror: Unexpected foo. foo foo.js:5,10\n\n1 problem"
        );
    }

    #[test]
    fn test_fatal_overrides_warning_severity() {
        let results = vec![FileResult::new("foo.js", vec![bar().fatal()])];
        assert!(plain(&results).contains("\nerror: Unexpected bar. bar foo.js:6,11\n"));
    }

    #[test]
    fn test_multiple_messages_one_file() {
        let results = vec![FileResult::new("foo.js", vec![foo(), bar()])];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 2\nerror: Unexpected foo. foo foo.js:5,10\nwarning: Unexpected bar. bar foo.js:6,11\n\n2 problems"
        );
    }

    #[test]
    fn test_multiple_files() {
        let results = vec![
            FileResult::new("foo.js", vec![foo()]),
            FileResult::new("bar.js", vec![bar()]),
        ];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 1\nerror: Unexpected foo. foo foo.js:5,10\n\n\nbar.js - 1\nwarning: Unexpected bar. bar bar.js:6,11\n\n2 problems"
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let results = vec![FileResult::new(
            "foo.js",
            vec![Diagnostic::new("Couldn't find foo.js.").fatal()],
        )];
        assert_eq!(
            plain(&results),
            "\n\nfoo.js - 1\nerror: Couldn't find foo.js.  foo.js:0,0\n\n1 problem"
        );
    }

    #[test]
    fn test_empty_rule_id_renders_as_empty_token() {
        let results = vec![FileResult::new(
            "/w/a.js",
            vec![Diagnostic::new("m").with_severity(1).with_rule("")],
        )];
        let report = render_report(&results, &PathNormalizer::new("/w"));
        assert_eq!(
            report.to_plain_string(),
            "\n\n./a.js - 1\nwarning: m  ./a.js:0,0\n\n1 problem"
        );
        assert!(report.paint(true).contains("m  \u{1b}"));
    }

    #[test]
    fn test_empty_files_are_skipped_but_order_kept() {
        let results = vec![
            FileResult::new("empty.js", vec![]),
            FileResult::new("bar.js", vec![bar()]),
            FileResult::new("also-empty.js", vec![]),
            FileResult::new("foo.js", vec![foo()]),
        ];
        let out = plain(&results);
        assert!(!out.contains("empty.js"));
        assert!(out.find("bar.js - 1").unwrap() < out.find("foo.js - 1").unwrap());
        assert!(out.ends_with("\n2 problems"));
    }

    #[test]
    fn test_messages_not_reordered() {
        let results = vec![FileResult::new("a.js", vec![bar(), foo()])];
        let out = plain(&results);
        assert!(out.find("warning:").unwrap() < out.find("error:").unwrap());
    }

    #[test]
    fn test_cwd_normalized_in_header_and_locator() {
        let results = vec![FileResult::new("/work/proj/src/a.js", vec![foo()])];
        assert_eq!(
            render(&results, "/work/proj"),
            "\n\n./src/a.js - 1\nerror: Unexpected foo. foo ./src/a.js:5,10\n\n1 problem"
        );
    }

    #[test]
    fn test_display_matches_plain() {
        let results = vec![FileResult::new("foo.js", vec![foo(), bar()])];
        let report = render_report(&results, &PathNormalizer::identity());
        assert_eq!(report.to_string(), report.to_plain_string());
    }

    #[test]
    fn test_paint_without_color_is_plain() {
        let results = vec![FileResult::new("foo.js", vec![foo(), bar()])];
        let report = render_report(&results, &PathNormalizer::identity());
        assert_eq!(report.paint(false), report.to_plain_string());
    }

    #[test]
    fn test_paint_with_color_keeps_skeleton() {
        let results = vec![
            FileResult::new("foo.js", vec![foo(), bar()]),
            FileResult::new("x.js", vec![Diagnostic::new("Couldn't find x.js.").fatal()]),
        ];
        let report = render_report(&results, &PathNormalizer::identity());
        let painted = report.paint(true);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains(&"error".red().to_string()));
        assert!(painted.contains(&"warning".yellow().to_string()));
        assert!(painted.contains(&"foo".dimmed().to_string()));
        assert!(painted.contains(&"foo.js:5,10".cyan().to_string()));
        assert_eq!(strip_ansi(&painted), report.to_plain_string());
    }

    #[test]
    fn test_empty_rule_not_wrapped() {
        let results = vec![FileResult::new(
            "foo.js",
            vec![Diagnostic::new("Couldn't find foo.js.").fatal()],
        )];
        let painted = render_report(&results, &PathNormalizer::identity()).paint(true);
        assert!(painted.contains("Couldn't find foo.js.  \u{1b}"));
    }

    #[test]
    fn test_plain_segments_are_merged() {
        let results = vec![FileResult::new("foo.js", vec![foo()])];
        let report = render_report(&results, &PathNormalizer::identity());
        let segs = &report.segments;
        assert!(segs
            .windows(2)
            .all(|w| !(w[0].tone == Tone::Plain && w[1].tone == Tone::Plain)));
        assert_eq!(segs[1].tone, Tone::Error);
    }
}
