//! JSON description strategy.

use crate::automaton::{Automaton, AutomatonBuilder, StateId};
use crate::loader::{LoadError, is_epsilon_token};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk JSON shape. Transitions are `[from, "symbol", to]` triples.
#[derive(Debug, Deserialize)]
struct Description {
    state_count: StateId,
    initial_state: StateId,
    final_states: Vec<StateId>,
    transitions: Vec<Transition>,
}

#[derive(Debug, Deserialize)]
struct Transition(StateId, String, StateId);

pub(crate) fn load(path: &Path) -> Result<Automaton, LoadError> {
    parse(&fs::read_to_string(path)?)
}

fn parse(text: &str) -> Result<Automaton, LoadError> {
    let description: Description = serde_json::from_str(text)?;

    let mut builder = AutomatonBuilder::new(description.state_count, description.initial_state);
    for state in description.final_states {
        builder.add_final_state(state);
    }
    for Transition(source, symbol, destination) in description.transitions {
        if is_epsilon_token(&symbol) {
            builder.add_epsilon_transition(source, destination);
        } else {
            builder.add_transition(source, symbol, destination);
        }
    }

    Ok(builder.build()?)
}
