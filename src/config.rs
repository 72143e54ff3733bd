//! Configuration discovery and effective settings resolution.
//!
//! Errlist reads `errlist.toml|yaml|yml` from the start directory (or the
//! closest ancestor, stopping at a `.git` directory) and merges it with CLI
//! flags to produce an `Effective` config.
//! Defaults:
//! - `color`: `auto`
//! - `cwd`: the process working directory
//! - `output_file`: none (write to stdout)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{ErrlistError, Result};
use crate::utils::ColorChoice;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILES: [&str; 3] = ["errlist.toml", "errlist.yaml", "errlist.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `errlist.toml|yaml`.
pub struct ErrlistConfig {
    pub color: Option<ColorChoice>,
    /// Directory substituted with `.` in rendered paths.
    pub cwd: Option<String>,
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub color: ColorChoice,
    pub cwd: String,
    pub output_file: Option<PathBuf>,
    /// Config file that contributed, if any.
    pub source: Option<PathBuf>,
}

/// Flags given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub color: Option<ColorChoice>,
    pub cwd: Option<String>,
    pub output_file: Option<String>,
    pub config: Option<String>,
}

/// Walk upward from `start` to the first directory holding a config file.
///
/// Stops (returning `None`) at a directory containing `.git`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_FILES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load a config file, choosing the parser from its extension.
pub fn load_config(path: &Path) -> Result<ErrlistConfig> {
    let s = fs::read_to_string(path).map_err(|e| ErrlistError::io(path, e))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str::<Option<ErrlistConfig>>(&s)
            .map(Option::unwrap_or_default)
            .map_err(|e| e.to_string())
    } else {
        toml::from_str::<ErrlistConfig>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| ErrlistError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `start` is where config discovery begins and the default `cwd`.
pub fn resolve_effective(cli: &CliOverrides, start: &Path) -> Result<Effective> {
    let source = match cli.config.as_deref() {
        Some(explicit) => Some(PathBuf::from(explicit)),
        None => find_config(start),
    };
    let cfg = match source.as_deref() {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            load_config(p)?
        }
        None => ErrlistConfig::default(),
    };

    let color = cli.color.or(cfg.color).unwrap_or_default();
    let cwd = cli
        .cwd
        .clone()
        .or(cfg.cwd)
        .unwrap_or_else(|| start.to_string_lossy().into_owned());
    let output_file = cli.output_file.clone().or(cfg.output_file).map(PathBuf::from);

    Ok(Effective {
        color,
        cwd,
        output_file,
        source,
    })
}
