//! Plain-text description strategy.

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
            .map(|(i, line)| (i + 1, line.to_owned())),
    )
}
