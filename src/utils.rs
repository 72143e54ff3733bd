//! Terminal helpers: color policy, stderr prefixes, and log setup.

use owo_colors::OwoColorize;
use serde::Deserialize;
use std::io::IsTerminal;

/// Env var holding the `tracing` filter directive.
pub const LOG_ENV: &str = "ERRLIST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// When to emit ANSI styling.
pub enum ColorChoice {
    /// Style only when the target is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide styling for a target given whether it is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn for_stdout(self) -> bool {
        self.enabled(std::io::stdout().is_terminal())
    }

    pub fn for_stderr(self) -> bool {
        self.enabled(std::io::stderr().is_terminal())
    }
}

pub fn error_prefix(color: ColorChoice) -> String {
    if color.for_stderr() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix(color: ColorChoice) -> String {
    if color.for_stderr() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Install the stderr `tracing` subscriber, filtered by `ERRLIST_LOG`
/// (default `warn`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // Ignore a second initialization (tests may call this repeatedly).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
