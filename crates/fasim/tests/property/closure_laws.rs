//! Laws of the epsilon closure and the acceptance decision, checked over
//! randomly generated automata.

use fasim::automaton::{Automaton, AutomatonBuilder, StateId, StateSet, symbol_id};
use proptest::prelude::*;

const STATES: StateId = 6;
const ALPHABET: [char; 3] = ['a', 'b', 'c'];

/// Random automata over a small alphabet, mixing symbol and epsilon
/// transitions. All generated ids are in range, so `build` cannot fail.
fn automata() -> impl Strategy<Value = Automaton> {
    let transition = (
        0..STATES,
        proptest::option::of(0..ALPHABET.len()),
        0..STATES,
    );
    (
        proptest::collection::vec(0..STATES, 0..4),
        proptest::collection::vec(transition, 0..24),
    )
        .prop_map(|(finals, transitions)| {
            let mut builder = AutomatonBuilder::new(STATES, 0);
            for state in finals {
                builder.add_final_state(state);
            }
            for (source, symbol, destination) in transitions {
                match symbol {
                    Some(idx) => {
                        builder.add_transition(source, String::from(ALPHABET[idx]), destination)
                    }
                    None => builder.add_epsilon_transition(source, destination),
                }
            }
            builder.build().expect("generated ids are in range")
        })
}

fn state_sets() -> impl Strategy<Value = StateSet> {
    proptest::collection::vec(0..STATES, 0..STATES as usize)
        .prop_map(|states| states.into_iter().collect())
}

proptest! {
    #[test]
    fn closure_is_idempotent(automaton in automata(), states in state_sets()) {
        let once = automaton.epsilon_closure(&states);
        let twice = automaton.epsilon_closure(&once);
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn closure_is_monotone(
        automaton in automata(),
        base in state_sets(),
        extra in state_sets(),
    ) {
        let mut larger = base.clone();
        larger.union_with(&extra);

        let closure_of_base = automaton.epsilon_closure(&base);
        let closure_of_larger = automaton.epsilon_closure(&larger);
        prop_assert!(closure_of_base.is_subset(&closure_of_larger));
    }

    #[test]
    fn closure_contains_its_input(automaton in automata(), states in state_sets()) {
        let closure = automaton.epsilon_closure(&states);
        prop_assert!(states.is_subset(&closure));
    }

    #[test]
    fn step_absorbs_the_empty_set(automaton in automata(), idx in 0..ALPHABET.len()) {
        let empty = StateSet::with_capacity(STATES as usize);
        prop_assert!(automaton.step(&empty, symbol_id(ALPHABET[idx])).is_empty());
    }

    #[test]
    fn accepts_is_total_and_agrees_with_run(
        automaton in automata(),
        input in "[abcz]{0,12}",
    ) {
        let run = automaton.run(&input);
        prop_assert_eq!(run.accepted, automaton.accepts(&input));

        // The trace always starts with the initial closure.
        prop_assert!(!run.trace.is_empty());
        prop_assert!(run.trace[0].contains(automaton.initial_state()));
    }

    /// An automaton with no epsilon moves and at most one destination per
    /// `(state, symbol)` pair behaves exactly like a deterministic table
    /// walk.
    #[test]
    fn deterministic_automata_match_a_table_walk(
        table in proptest::collection::vec(
            proptest::collection::vec(proptest::option::of(0..STATES), ALPHABET.len()),
            STATES as usize,
        ),
        finals in proptest::collection::vec(0..STATES, 0..4),
        input in "[abc]{0,12}",
    ) {
        let mut builder = AutomatonBuilder::new(STATES, 0);
        for &state in &finals {
            builder.add_final_state(state);
        }
        for (state, row) in table.iter().enumerate() {
            for (idx, destination) in row.iter().enumerate() {
                if let Some(destination) = *destination {
                    builder.add_transition(
                        state as StateId,
                        String::from(ALPHABET[idx]),
                        destination,
                    );
                }
            }
        }
        let automaton = builder.build().unwrap();

        let mut state = Some(0);
        for c in input.chars() {
            let idx = ALPHABET.iter().position(|&s| s == c).unwrap();
            state = state.and_then(|s: StateId| table[s as usize][idx]);
        }
        let expected = state.is_some_and(|s| finals.contains(&s));

        prop_assert_eq!(automaton.accepts(&input), expected);
    }
}
