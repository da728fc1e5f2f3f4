//! Loader strategies for on-disk automaton descriptions.
//!
//! Each supported notation is an independent strategy producing the same
//! thing: a validated [`Automaton`]. Format quirks (quoting, the epsilon
//! token) are normalized here; the simulation engine never sees raw text.
//!
//! In every format, the symbol token `e` (case-insensitive) or the literal
//! `ε` denotes an epsilon move.

mod csv;
mod json;
mod rows;
mod txt;

use crate::automaton::{Automaton, BuildError, EPSILON_TOKEN};
use std::path::Path;
use thiserror::Error;

/// Failures while turning a description file into an automaton.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension maps to no known strategy.
    #[error("unsupported description format {extension:?} (expected txt, csv, or json)")]
    UnsupportedFormat { extension: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line of a tabular description did not parse.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid JSON description: {0}")]
    Json(#[from] serde_json::Error),
    /// The description parsed but violated a structural invariant.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Load a description file, choosing the strategy by file extension.
pub fn load_path(path: &Path) -> Result<Automaton, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "txt" => txt::load(path),
        "csv" => csv::load(path),
        "json" => json::load(path),
        _ => Err(LoadError::UnsupportedFormat { extension }),
    }
}

/// Whether a symbol field denotes an epsilon move.
fn is_epsilon_token(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("e") || raw == EPSILON_TOKEN
}
