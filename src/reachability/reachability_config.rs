use crate::transition::{State, TransitionRelation};
use std::collections::BTreeSet;

/// A "flat" configuration object for various reachability problems.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachabilityConfig {
    /// The transition relation used for reachability computation.
    ///
    /// # Panics
    ///
    /// The procedure is allowed to panic if initialized with states that do not belong
    /// to this relation.
    pub relation: TransitionRelation,
    /// If set, the procedure never leaves this set of states (default: `None`, meaning
    /// all states are admissible).
    ///
    /// Keep in mind that restricting the state space eliminates the transitions leaving it,
    /// which can make a set appear closed even though it is not closed in the full relation.
    pub state_space: Option<BTreeSet<State>>,
    /// Cancel the procedure if it exceeds the specified number of iterations (default:
    /// `usize::MAX`).
    ///
    /// One iteration corresponds to one BFS layer.
    pub max_iterations: usize,
}

impl From<TransitionRelation> for ReachabilityConfig {
    fn from(value: TransitionRelation) -> Self {
        ReachabilityConfig::new(value)
    }
}

impl From<&TransitionRelation> for ReachabilityConfig {
    fn from(value: &TransitionRelation) -> Self {
        ReachabilityConfig::new(value.clone())
    }
}

impl ReachabilityConfig {
    /// Create a new instance of [`ReachabilityConfig`] from a [`TransitionRelation`] with
    /// all states admissible.
    pub fn new(relation: TransitionRelation) -> ReachabilityConfig {
        ReachabilityConfig {
            relation,
            state_space: None,
            max_iterations: usize::MAX,
        }
    }

    /// Restrict the admissible states to the given set (intersected with any previous
    /// restriction).
    pub fn restrict_state_space(mut self, states: &BTreeSet<State>) -> ReachabilityConfig {
        self.state_space = Some(match self.state_space.take() {
            Some(current) => current.intersection(states).copied().collect(),
            None => states.clone(),
        });
        self
    }

    /// Check whether the procedure may visit `state`.
    pub fn admits(&self, state: State) -> bool {
        self.state_space
            .as_ref()
            .is_none_or(|space| space.contains(&state))
    }
}
