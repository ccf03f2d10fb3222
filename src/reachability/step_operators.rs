use crate::log_states;
use crate::reachability::{ReachabilityConfig, ReachabilityStep};
use crate::transition::State;
use cancel_this::{Cancellable, is_cancelled};
use log::trace;
use std::collections::BTreeSet;

/// Computes the direct successors of the current reachable set, excluding values that are
/// already in the reachable set.
pub struct BfsSuccessors;

/// Computes the direct predecessors of the current reachable set, excluding values that are
/// already in the reachable set.
pub struct BfsPredecessors;

impl ReachabilityStep for BfsSuccessors {
    fn step(context: &ReachabilityConfig, state: &BTreeSet<State>) -> Cancellable<BTreeSet<State>> {
        let mut post = BTreeSet::new();
        for source in state {
            is_cancelled!()?;
            let fresh = context
                .relation
                .distinct_successors(*source)
                .filter(|it| !state.contains(it) && context.admits(*it));
            post.extend(fresh);
        }
        trace!("Successors computed ({}).", log_states(&post));
        Ok(post)
    }
}

impl ReachabilityStep for BfsPredecessors {
    fn step(context: &ReachabilityConfig, state: &BTreeSet<State>) -> Cancellable<BTreeSet<State>> {
        let mut pre = BTreeSet::new();
        for source in context.relation.states() {
            if state.contains(&source) || !context.admits(source) {
                continue;
            }
            is_cancelled!()?;
            let successors = context.relation.successors(source);
            if successors.iter().any(|it| state.contains(it)) {
                pre.insert(source);
            }
        }
        trace!("Predecessors computed ({}).", log_states(&pre));
        Ok(pre)
    }
}
