//! Finite automaton model and simulation.
//!
//! This module provides:
//! - An immutable, construction-validated automaton (state count, initial
//!   state, final states, transition relation)
//! - Epsilon closure computation
//! - Set-based acceptance simulation with an optional trace of the state
//!   sets visited

mod model;
mod sim;
mod state;
mod symbol;

pub use model::{Automaton, AutomatonBuilder, BuildError};
pub use sim::Run;
pub use state::{StateId, StateSet};
pub use symbol::{EPSILON, EPSILON_TOKEN, SymbolId, is_epsilon, parse_symbol, symbol_id};
