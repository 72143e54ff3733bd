//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use crate::utils::ColorChoice;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "errlist",
    version,
    about = "Render lint results as a Visual Studio error list",
    long_about = "errlist — render ESLint-style JSON results as a Visual Studio compatible error list.\n\nConfiguration precedence: CLI > errlist.toml > defaults.",
    after_help = "Examples:\n  eslint -f json src | errlist\n  errlist results.json --color never\n  errlist 'reports/*.json' --output-file errors.txt\n  errlist results.json --cwd /home/ci/project",
    args_conflicts_with_subcommands = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    #[arg(help = "JSON result files or glob patterns; none or '-' reads stdin")]
    pub inputs: Vec<String>,

    #[arg(long, help = "Directory replaced by '.' in file paths (default: current dir)")]
    pub cwd: Option<String>,

    #[arg(long, value_enum, help = "Styling: auto|always|never (default: auto)")]
    pub color: Option<ColorChoice>,

    #[arg(long, help = "Write the report to this file instead of stdout")]
    pub output_file: Option<String>,

    #[arg(long, help = "Path to an errlist.toml|yaml (default: discovered)")]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current errlist version.")]
    Version,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            color: self.color,
            cwd: self.cwd.clone(),
            output_file: self.output_file.clone(),
            config: self.config.clone(),
        }
    }
}
