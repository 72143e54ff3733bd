//! Errlist CLI binary entry point.
//! Loads results, renders the error list, and maps problems to exit codes.

use clap::Parser;
use errlist::cli::{Cli, Commands};
use errlist::error::Result;
use errlist::config::Effective;
use errlist::utils::ColorChoice;
use errlist::{config, input, output, render_report, utils, PathNormalizer, Summary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::init_logging();

    if let Some(Commands::Version) = cli.cmd {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let eff = match config::resolve_effective(&cli.overrides(), &start) {
        Ok(eff) => eff,
        Err(e) => return fail(cli.color.unwrap_or_default(), &e),
    };
    debug!(?eff, "resolved config");

    match run(&cli, &eff) {
        Ok(summary) if summary.has_errors() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(eff.color, &e),
    }
}

fn fail(color: ColorChoice, e: &errlist::ErrlistError) -> ExitCode {
    eprintln!("{} {}", utils::error_prefix(color), e);
    ExitCode::from(2)
}

fn run(cli: &Cli, eff: &Effective) -> Result<Summary> {
    let results = if input::wants_stdin(&cli.inputs) {
        input::read_stdin_results()?
    } else {
        let paths = input::expand_inputs(&cli.inputs)?;
        info!(files = paths.len(), "loading results");
        input::load_results(&paths)?
    };

    let report = render_report(&results, &PathNormalizer::new(eff.cwd.as_str()));
    let summary = Summary::from_results(&results);

    match eff.output_file.as_deref() {
        Some(path) => {
            output::write_report(&report, path)?;
            eprintln!(
                "{} wrote {} problem(s) to {}",
                utils::note_prefix(eff.color),
                summary.total,
                path.display()
            );
        }
        None => output::print_report(&report, eff.color),
    }
    debug!(
        errors = summary.errors,
        warnings = summary.warnings,
        files = summary.files,
        "rendered report"
    );
    Ok(summary)
}
