//! Explicit transition relation of an elementary cellular automaton.
//!
//! An automaton of length `L` has `2^L` states. Each state is an integer whose binary
//! representation lists the cell values, with the most significant bit being the leftmost
//! cell. The two cells at the ends of the strip have one neighbor missing, which is
//! supplied externally (an *open* boundary, not a ring). Since the exogenous bits are not
//! known, every state has exactly four successors, one for each combination of the left
//! and right boundary bit:
//!
//! | slot | left | right |
//! |------|------|-------|
//! | 0    | 0    | 0     |
//! | 1    | 0    | 1     |
//! | 2    | 1    | 0     |
//! | 3    | 1    | 1     |
//!
//! All four slots are considered equally likely, so duplicate successors weight the
//! corresponding transition.
//!
//! ```
//! use eca_complexity::TransitionRelation;
//!
//! let relation = TransitionRelation::build(110, 3);
//! assert_eq!(relation.num_states(), 8);
//! assert_eq!(relation.successors(0), &[0, 1, 0, 1]);
//! ```

mod encoding;


pub use encoding::{bits_to_state, state_to_bits};
use log::debug;
use std::sync::Arc;

/// A state of the automaton (cell values encoded as bits, leftmost cell is the MSB).
pub type State = u32;

/// An elementary cellular automaton rule number (Wolfram code).
pub type Rule = u8;

/// Number of successor slots of each state (all combinations of the two boundary bits).
pub const SLOTS: usize = 4;

/// The full transition relation of one elementary cellular automaton.
///
/// The successor table is shared, so cloning the relation is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionRelation {
    rule: Rule,
    length: usize,
    successors: Arc<Vec<[State; SLOTS]>>,
}

impl TransitionRelation {
    /// Build the transition relation of `rule` for an automaton with `length` cells.
    ///
    /// # Panics
    ///
    /// The `length` must be at least one and the number of states must be addressable
    /// using [`State`]. Validating these bounds is the responsibility of the caller.
    pub fn build(rule: Rule, length: usize) -> TransitionRelation {
        assert!(length >= 1, "Automaton needs at least one cell.");
        assert!(
            length < State::BITS as usize,
            "Automaton with {length} cells is too large."
        );

        let num_states: State = 1 << length;
        let successors = (0..num_states)
            .map(|state| {
                let mut slots = [0; SLOTS];
                for (slot, (left, right)) in BOUNDARIES.iter().enumerate() {
                    slots[slot] = next_state(rule, length, state, *left, *right);
                }
                slots
            })
            .collect::<Vec<_>>();

        debug!("Built transition relation of rule {rule} with {num_states} states.");

        TransitionRelation {
            rule,
            length,
            successors: Arc::new(successors),
        }
    }

    /// The rule number this relation was built from.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The number of cells of the automaton.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The number of states (`2^length`).
    pub fn num_states(&self) -> usize {
        self.successors.len()
    }

    /// Iterate over all states in ascending order.
    pub fn states(&self) -> impl Iterator<Item = State> {
        0..(self.num_states() as State)
    }

    /// The four successor slots of `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a valid state of this relation.
    pub fn successors(&self, state: State) -> &[State; SLOTS] {
        &self.successors[state as usize]
    }

    /// Successors of `state` without duplicates, in slot order.
    pub fn distinct_successors(&self, state: State) -> impl Iterator<Item = State> + '_ {
        let slots = self.successors(state);
        slots
            .iter()
            .enumerate()
            .filter(move |(i, it)| !slots[..*i].contains(it))
            .map(|(_, it)| *it)
    }

    /// The number of slots of `from` that lead to `to`.
    pub fn multiplicity(&self, from: State, to: State) -> usize {
        self.successors(from).iter().filter(|it| **it == to).count()
    }
}

/// Boundary bits `(left, right)` in slot order.
const BOUNDARIES: [(bool, bool); SLOTS] =
    [(false, false), (false, true), (true, false), (true, true)];

fn cell(state: State, shift: usize) -> bool {
    (state >> shift) & 1 == 1
}

/// Compute the successor of `state` given the exogenous boundary bits.
fn next_state(rule: Rule, length: usize, state: State, left: bool, right: bool) -> State {
    let mut next: State = 0;
    for position in 0..length {
        let shift = length - 1 - position;
        let l = if position == 0 {
            left
        } else {
            cell(state, shift + 1)
        };
        let c = cell(state, shift);
        let r = if position == length - 1 {
            right
        } else {
            cell(state, shift - 1)
        };
        let neighborhood = (l as u8) << 2 | (c as u8) << 1 | (r as u8);
        next = (next << 1) | State::from((rule >> neighborhood) & 1);
    }
    next
}
