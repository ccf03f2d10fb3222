use crate::transition::State;
use std::collections::BTreeSet;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachabilityState {
    pub iteration: usize,
    pub set: BTreeSet<State>,
}

impl From<BTreeSet<State>> for ReachabilityState {
    fn from(value: BTreeSet<State>) -> Self {
        ReachabilityState {
            iteration: 0,
            set: value,
        }
    }
}

impl From<&BTreeSet<State>> for ReachabilityState {
    fn from(value: &BTreeSet<State>) -> Self {
        Self::from(value.clone())
    }
}

impl From<State> for ReachabilityState {
    fn from(value: State) -> Self {
        Self::from(BTreeSet::from([value]))
    }
}

impl From<ReachabilityState> for BTreeSet<State> {
    fn from(value: ReachabilityState) -> Self {
        value.set
    }
}
