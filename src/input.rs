//! Loading analysis results from JSON documents.
//!
//! Accepts the ESLint `--format json` shape: an array of file results, or a
//! single file result object. Inputs are literal paths or glob patterns;
//! several documents are concatenated in input order.

use crate::error::{ErrlistError, Result};
use crate::models::FileResult;
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Argument meaning "read from stdin".
pub const STDIN_ARG: &str = "-";

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<FileResult>),
    One(FileResult),
}

/// Parse one results document. `origin` names it in error messages.
pub fn parse_results(json: &str, origin: &str) -> Result<Vec<FileResult>> {
    // Untagged errors are opaque, so retry as an array for the message.
    match serde_json::from_str::<Document>(json) {
        Ok(Document::Many(v)) => Ok(v),
        Ok(Document::One(r)) => Ok(vec![r]),
        Err(untagged) => {
            let source = match serde_json::from_str::<Vec<FileResult>>(json) {
                Err(e) if json.trim_start().starts_with('[') => e,
                _ => untagged,
            };
            Err(ErrlistError::Json {
                origin: origin.to_string(),
                source,
            })
        }
    }
}

fn is_glob(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand literal paths and glob patterns into an ordered, de-duplicated
/// list of files. Glob matches are sorted; a glob matching nothing fails.
pub fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out: Vec<PathBuf> = Vec::new();
    for arg in args {
        let mut batch: Vec<PathBuf> = if is_glob(arg) {
            let paths = glob::glob(arg).map_err(|source| ErrlistError::Glob {
                pattern: arg.clone(),
                source,
            })?;
            let mut matched: Vec<PathBuf> =
                paths.filter_map(|entry| entry.ok()).filter(|p| p.is_file()).collect();
            if matched.is_empty() {
                return Err(ErrlistError::NoInputMatched(arg.clone()));
            }
            matched.sort();
            debug!(pattern = %arg, matches = matched.len(), "expanded glob");
            matched
        } else {
            vec![PathBuf::from(arg)]
        };
        batch.retain(|p| seen.insert(p.clone()));
        out.extend(batch);
    }
    Ok(out)
}

/// Read and parse every file, concatenating results in path order.
pub fn load_results(paths: &[PathBuf]) -> Result<Vec<FileResult>> {
    let per_file: Vec<Vec<FileResult>> = paths
        .par_iter()
        .map(|path| -> Result<Vec<FileResult>> {
            let data = fs::read_to_string(path).map_err(|e| ErrlistError::io(path, e))?;
            let results = parse_results(&data, &path.to_string_lossy())?;
            debug!(path = %path.display(), files = results.len(), "loaded results");
            Ok(results)
        })
        .collect::<Result<_>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

pub fn read_results_from(mut reader: impl Read) -> Result<Vec<FileResult>> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(ErrlistError::Stdin)?;
    parse_results(&buf, "<stdin>")
}

pub fn read_stdin_results() -> Result<Vec<FileResult>> {
    read_results_from(std::io::stdin().lock())
}

/// Stdin is used when there are no inputs or the single input is `-`.
pub fn wants_stdin(args: &[String]) -> bool {
    args.is_empty() || (args.len() == 1 && args[0] == STDIN_ARG)
}
