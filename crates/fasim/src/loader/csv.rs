//! CSV description strategy.
//!
//! Same row layout as the plain-text format; fields may additionally be
//! wrapped in double quotes, which are stripped before parsing.

use crate::automaton::Automaton;
use crate::loader::{LoadError, rows};
use std::fs;
use std::path::Path;

pub(crate) fn load(path: &Path) -> Result<Automaton, LoadError> {
    parse(&fs::read_to_string(path)?)
}

fn parse(text: &str) -> Result<Automaton, LoadError> {
    rows::build_from_rows(
        text.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.replace('"', ""))),
    )
}
