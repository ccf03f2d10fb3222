use crate::transition::{State, TransitionRelation};

/// The states of one attractor, kept in ascending order.
///
/// The order has no meaning beyond presentation, but distributions computed for an
/// attractor are synchronized with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attractor {
    states: Vec<State>,
}

impl Attractor {
    /// Create an attractor from its member states (duplicates are ignored).
    ///
    /// This does not check that the states actually form an attractor of any relation.
    ///
    /// # Panics
    ///
    /// An attractor must have at least one state.
    pub fn new(states: impl IntoIterator<Item = State>) -> Attractor {
        let mut states = states.into_iter().collect::<Vec<_>>();
        assert!(!states.is_empty(), "Attractor cannot be empty.");
        states.sort_unstable();
        states.dedup();
        Attractor { states }
    }

    /// The whole state space of `relation` as a single attractor.
    ///
    /// This is only valid when the relation is known to be strongly connected; it lets
    /// callers skip the attractor search.
    pub fn whole_space(relation: &TransitionRelation) -> Attractor {
        Attractor {
            states: relation.states().collect(),
        }
    }

    /// Member states in ascending order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`, provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The lowest member state.
    pub fn representative(&self) -> State {
        self.states[0]
    }

    pub fn contains(&self, state: State) -> bool {
        self.states.binary_search(&state).is_ok()
    }

    /// Position of `state` in [`Attractor::states`].
    pub fn index_of(&self, state: State) -> Option<usize> {
        self.states.binary_search(&state).ok()
    }

    /// Find a successor of some member that is not a member itself.
    ///
    /// Returns `None` when the attractor is closed under `relation`.
    pub fn find_escape(&self, relation: &TransitionRelation) -> Option<State> {
        self.states
            .iter()
            .flat_map(|it| relation.successors(*it).iter())
            .find(|it| !self.contains(**it))
            .copied()
    }

    /// Check that no transition leaves the attractor.
    pub fn is_closed(&self, relation: &TransitionRelation) -> bool {
        self.find_escape(relation).is_none()
    }
}
