//! Validated automaton model.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON_TOKEN, SymbolId, is_epsilon, parse_symbol};
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

/// Construction-time validation failures. Simulation itself never fails:
/// every input string is decided by normal acceptance or rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A referenced state id lies outside `0..state_count`.
    #[error("state {state} is out of range for an automaton with {state_count} states")]
    OutOfRangeState { state: StateId, state_count: StateId },
    /// A transition symbol is neither the epsilon marker nor one character.
    #[error("transition symbol {symbol:?} is not a single character")]
    InvalidSymbol { symbol: String },
}

/// An immutable finite automaton over character symbols.
///
/// Deterministic and nondeterministic automata share this representation:
/// a DFA is the special case where no epsilon transitions exist and every
/// destination set holds at most one state. Once built, an automaton is
/// never mutated, so sharing one across threads needs no locking.
#[derive(Debug, Clone)]
pub struct Automaton {
    state_count: StateId,
    initial_state: StateId,
    final_states: StateSet,
    /// `(source, symbol) -> destinations`. Keys with empty destination sets
    /// are never stored; absence of a key means "no transition".
    transitions: IndexMap<(StateId, SymbolId), StateSet>,
    /// Symbols with at least one transition, excluding epsilon.
    alphabet: HashSet<SymbolId>,
}

impl Automaton {
    pub fn state_count(&self) -> StateId {
        self.state_count
    }

    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Symbols with at least one transition, excluding epsilon.
    pub fn alphabet(&self) -> &HashSet<SymbolId> {
        &self.alphabet
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    /// Destinations reachable from `state` on `symbol`. `None` means no
    /// transition exists, which callers treat as the empty set.
    pub fn transitions_from(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }
}

/// Accumulates a declarative automaton description and validates it into an
/// [`Automaton`].
///
/// Transition symbols are raw text so that malformed declarations surface as
/// [`BuildError::InvalidSymbol`] at [`build`](Self::build) time. Entries
/// sharing a `(state, symbol)` pair are merged by set union, never
/// overwritten; nondeterministic descriptions rely on this.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    state_count: StateId,
    initial_state: StateId,
    final_states: Vec<StateId>,
    transitions: Vec<(StateId, String, StateId)>,
}

impl AutomatonBuilder {
    pub fn new(state_count: StateId, initial_state: StateId) -> Self {
        Self {
            state_count,
            initial_state,
            final_states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare an accepting state. Duplicates collapse into the final set.
    pub fn add_final_state(&mut self, state: StateId) {
        self.final_states.push(state);
    }

    /// Declare a transition from `source` to `destination` on `symbol`.
    pub fn add_transition(&mut self, source: StateId, symbol: impl Into<String>, destination: StateId) {
        self.transitions.push((source, symbol.into(), destination));
    }

    /// Declare an epsilon transition from `source` to `destination`.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.transitions.push((source, EPSILON_TOKEN.to_owned(), destination));
    }

    /// Validate the accumulated description and produce the automaton.
    ///
    /// Fails with [`BuildError::OutOfRangeState`] if any referenced state id
    /// (initial, final, transition source or destination) is outside
    /// `0..state_count`, and with [`BuildError::InvalidSymbol`] if a
    /// transition symbol is neither the epsilon marker nor one character.
    /// No partially built automaton is ever returned.
    pub fn build(self) -> Result<Automaton, BuildError> {
        self.check_state(self.initial_state)?;

        let mut final_states = StateSet::with_capacity(self.state_count as usize);
        for &state in &self.final_states {
            final_states.insert(self.check_state(state)?);
        }

        let mut transitions: IndexMap<(StateId, SymbolId), StateSet> = IndexMap::new();
        let mut alphabet = HashSet::new();
        for (source, raw_symbol, destination) in &self.transitions {
            let symbol = parse_symbol(raw_symbol).ok_or_else(|| BuildError::InvalidSymbol {
                symbol: raw_symbol.clone(),
            })?;
            self.check_state(*source)?;
            self.check_state(*destination)?;

            if !is_epsilon(symbol) {
                alphabet.insert(symbol);
            }
            transitions
                .entry((*source, symbol))
                .or_insert_with(|| StateSet::with_capacity(self.state_count as usize))
                .insert(*destination);
        }

        Ok(Automaton {
            state_count: self.state_count,
            initial_state: self.initial_state,
            final_states,
            transitions,
            alphabet,
        })
    }

    fn check_state(&self, state: StateId) -> Result<StateId, BuildError> {
        if state < self.state_count {
            Ok(state)
        } else {
            Err(BuildError::OutOfRangeState {
                state,
                state_count: self.state_count,
            })
        }
    }
}
