//! Set-based acceptance simulation.
//!
//! The engine steps a *set* of active states across the input, resolving
//! epsilon moves with a closure computation between symbols. An input is
//! accepted when the set reached after the last symbol intersects the final
//! states. A DFA simply keeps the set at cardinality one (or empty); there
//! is no separate deterministic code path.

use crate::automaton::model::Automaton;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, SymbolId, is_epsilon, symbol_id};

/// Outcome of one simulation, with the state sets visited.
///
/// `trace[0]` is the epsilon closure of the initial state; each following
/// entry is the active set after one more consumed symbol. When the active
/// set empties mid-input the simulation stops, so the trace can be shorter
/// than `input` plus one. The trace is diagnostic only and never changes
/// the verdict.
#[derive(Debug, Clone)]
pub struct Run {
    pub accepted: bool,
    pub trace: Vec<StateSet>,
}

impl Automaton {
    /// The smallest superset of `states` closed under epsilon transitions.
    ///
    /// Worklist traversal: termination is guaranteed because the closure
    /// grows monotonically and is bounded by the state count. Traversal
    /// order does not affect the result.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.state_count() as usize);
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(state) = stack.pop() {
            if closure.contains(state) {
                continue;
            }
            closure.insert(state);

            if let Some(destinations) = self.transitions_from(state, EPSILON) {
                for dest in destinations.iter() {
                    if !closure.contains(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// All states reachable from `states` by consuming `symbol`, epsilon
    /// closed. The empty set maps to the empty set: a stuck simulation
    /// needs no sentinel state.
    pub fn step(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        assert!(!is_epsilon(symbol), "use epsilon_closure for epsilon moves");

        let mut reached = StateSet::with_capacity(self.state_count() as usize);
        for state in states.iter() {
            if let Some(destinations) = self.transitions_from(state, symbol) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Decide whether the automaton accepts `input`.
    ///
    /// A symbol with no outgoing transitions anywhere in the active set
    /// empties it; the remaining input can then be skipped because the
    /// empty set absorbs every further step.
    pub fn accepts(&self, input: &str) -> bool {
        let start = StateSet::singleton(self.initial_state(), self.state_count() as usize);
        let mut current = self.epsilon_closure(&start);

        for c in input.chars() {
            current = self.step(&current, symbol_id(c));
            if current.is_empty() {
                return false;
            }
        }

        current.intersects(self.final_states())
    }

    /// Like [`accepts`](Self::accepts), but also report the state sets
    /// visited along the way.
    pub fn run(&self, input: &str) -> Run {
        let start = StateSet::singleton(self.initial_state(), self.state_count() as usize);
        let mut current = self.epsilon_closure(&start);
        let mut trace = Vec::with_capacity(input.len() + 1);
        trace.push(current.clone());

        for c in input.chars() {
            current = self.step(&current, symbol_id(c));
            trace.push(current.clone());
            if current.is_empty() {
                break;
            }
        }

        Run {
            accepted: current.intersects(self.final_states()),
            trace,
        }
    }
}
