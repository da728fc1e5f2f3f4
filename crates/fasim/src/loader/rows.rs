//! Line-oriented description grammar shared by the text and CSV strategies.
//!
//! Layout:
//! - line 1: state count
//! - line 2: initial state
//! - line 3: comma-separated final states (may be blank)
//! - remaining lines: `from,symbol,to` transitions

use crate::automaton::{Automaton, AutomatonBuilder, StateId};
use crate::loader::{LoadError, is_epsilon_token};

/// Build an automaton from `(line number, cleaned line)` pairs. Blank
/// transition lines are skipped.
pub(crate) fn build_from_rows<I>(mut rows: I) -> Result<Automaton, LoadError>
where
    I: Iterator<Item = (usize, String)>,
{
    let state_count = header_field(rows.next(), 1, "state count")?;
    let initial_state = header_field(rows.next(), 2, "initial state")?;
    let mut builder = AutomatonBuilder::new(state_count, initial_state);

    let (finals_line, finals) = rows.next().ok_or_else(|| missing(3, "final states"))?;
    for field in finals.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        builder.add_final_state(state_field(finals_line, field)?);
    }

    for (line, row) in rows {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        let &[source, symbol, destination] = fields.as_slice() else {
            return Err(LoadError::Parse {
                line,
                message: format!("expected `from,symbol,to`, got {row:?}"),
            });
        };

        let source = state_field(line, source)?;
        let destination = state_field(line, destination)?;
        if is_epsilon_token(symbol) {
            builder.add_epsilon_transition(source, destination);
        } else {
            builder.add_transition(source, symbol, destination);
        }
    }

    Ok(builder.build()?)
}

fn header_field(
    row: Option<(usize, String)>,
    expected_line: usize,
    what: &str,
) -> Result<StateId, LoadError> {
    let (line, text) = row.ok_or_else(|| missing(expected_line, what))?;
    state_field(line, text.trim())
}

fn state_field(line: usize, field: &str) -> Result<StateId, LoadError> {
    field.parse().map_err(|_| LoadError::Parse {
        line,
        message: format!("expected a state number, got {field:?}"),
    })
}

fn missing(line: usize, what: &str) -> LoadError {
    LoadError::Parse {
        line,
        message: format!("missing {what} line"),
    }
}
