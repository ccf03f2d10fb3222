//! Stationary probability distributions over the states of an attractor.
//!
//! Inside an attractor, the automaton behaves as an irreducible Markov chain in which each
//! of the four successor slots is taken with probability `1/4`. The stationary distribution
//! can be obtained in two ways:
//!
//! - [`exact_probabilities`]: Solve the flow-balance equations exactly over rational numbers.
//!   The cost is cubic in the attractor size.
//! - [`estimate_probabilities`]: Simulate a random walk and count visits. The error shrinks
//!   with the square root of the number of iterations.
//!
//! The resulting [`Distribution`] is synchronized with the ascending state order of the
//! [`Attractor`].

mod exact;
mod simulation;

#[cfg(test)]
mod tests;

use crate::attractor::Attractor;
use crate::transition::{SLOTS, State, TransitionRelation};
use cancel_this::Cancelled;
pub use exact::{ExactDistribution, exact_probabilities};
pub use simulation::estimate_probabilities;

/// Failures of the probability computation.
#[derive(Debug, thiserror::Error)]
pub enum ProbabilityError {
    #[error("balance equations do not have a unique solution")]
    SingularSystem,
    #[error("simulation needs at least one iteration (use the exact solution instead)")]
    ZeroIterations,
    #[error("state {state} can be reached from the attractor but is not its member")]
    NotClosed { state: State },
    #[error("probability {0} cannot be represented as a floating point number")]
    Unrepresentable(String),
    #[error("computation cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for ProbabilityError {
    fn from(value: Cancelled) -> Self {
        ProbabilityError::Cancelled(value)
    }
}

/// Probability of each state of one attractor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    states: Vec<State>,
    probabilities: Vec<f64>,
}

impl Distribution {
    /// Create a distribution for `attractor`, with probabilities listed in the same
    /// order as [`Attractor::states`].
    ///
    /// # Panics
    ///
    /// The number of probabilities must match the size of the attractor.
    pub fn new(attractor: &Attractor, probabilities: Vec<f64>) -> Distribution {
        assert_eq!(attractor.len(), probabilities.len());
        Distribution {
            states: attractor.states().to_vec(),
            probabilities,
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Iterate over `(state, probability)` pairs in ascending state order.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.states
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }

    /// Probability of `state`, or `None` if it is not part of the distribution.
    pub fn probability_of(&self, state: State) -> Option<f64> {
        self.states
            .binary_search(&state)
            .ok()
            .map(|i| self.probabilities[i])
    }

    /// Sum of all probabilities (one, up to rounding).
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

/// Translate the transitions of `attractor` into positions within the attractor.
///
/// Fails with [`ProbabilityError::NotClosed`] if some transition leaves the attractor.
fn local_transitions(
    relation: &TransitionRelation,
    attractor: &Attractor,
) -> Result<Vec<[usize; SLOTS]>, ProbabilityError> {
    attractor
        .states()
        .iter()
        .map(|source| {
            let mut local = [0; SLOTS];
            for (slot, target) in relation.successors(*source).iter().enumerate() {
                local[slot] = attractor
                    .index_of(*target)
                    .ok_or(ProbabilityError::NotClosed { state: *target })?;
            }
            Ok(local)
        })
        .collect()
}
