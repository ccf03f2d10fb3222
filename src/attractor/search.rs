use crate::attractor::Attractor;
use crate::transition::{State, TransitionRelation};
use cancel_this::{Cancellable, is_cancelled};
use log::{debug, trace};

/// How often (in visited states) a traversal checks for cancellation.
const CANCEL_CHECK_INTERVAL: usize = 1 << 12;

/// Per-state bookkeeping of the origin search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Mark {
    /// Not touched by the current traversal.
    Unvisited,
    /// The origin currently tested as part of a new attractor.
    Origin,
    /// Touched by the current traversal. Reset to `Unvisited` once the traversal ends.
    Visited,
    /// Known to be transient or a member of an already reported attractor.
    Finalized,
}

/// Controls what a traversal does once it rediscovers the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum SearchMode {
    /// Explore everything reachable, collecting the visited states.
    CollectFull,
    /// Stop as soon as the origin is found.
    ProbeEarlyExit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    FoundOrigin,
    NotFound,
    /// The traversal reached a finalized state, so it cannot be part of a new attractor.
    ReachedFinalized,
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// In [`SearchMode::CollectFull`], `start` must be the origin, and its successors are
/// explored. In [`SearchMode::ProbeEarlyExit`], `start` itself is the first state examined.
/// Every state marked as visited is pushed to `visited`, even if the traversal is cancelled,
/// so that the caller can always reset the marks.
fn search(
    relation: &TransitionRelation,
    marks: &mut [Mark],
    start: State,
    mode: SearchMode,
    visited: &mut Vec<State>,
) -> Cancellable<Outcome> {
    let mut stack = match mode {
        SearchMode::CollectFull => relation.distinct_successors(start).collect::<Vec<_>>(),
        SearchMode::ProbeEarlyExit => vec![start],
    };
    let mut found = false;
    while let Some(state) = stack.pop() {
        let mark = &mut marks[state as usize];
        match *mark {
            Mark::Finalized => return Ok(Outcome::ReachedFinalized),
            Mark::Origin => {
                if mode == SearchMode::ProbeEarlyExit {
                    return Ok(Outcome::FoundOrigin);
                }
                found = true;
            }
            Mark::Visited => (),
            Mark::Unvisited => {
                if visited.len() % CANCEL_CHECK_INTERVAL == 0 {
                    is_cancelled!()?;
                }
                *mark = Mark::Visited;
                visited.push(state);
                stack.extend(relation.distinct_successors(state));
            }
        }
    }

    Ok(if found {
        Outcome::FoundOrigin
    } else {
        Outcome::NotFound
    })
}

fn reset_visited(marks: &mut [Mark], visited: &[State]) {
    for state in visited {
        let mark = &mut marks[*state as usize];
        if *mark == Mark::Visited {
            *mark = Mark::Unvisited;
        }
    }
}

/// Decide whether `origin` belongs to a new attractor, updating `marks` accordingly.
///
/// On success, all attractor members are finalized. If the origin is transient, only the
/// origin is finalized. If the computation is cancelled, the marks are restored to their
/// original values, so the same origin can be tested again.
pub(crate) fn resolve_origin(
    relation: &TransitionRelation,
    marks: &mut [Mark],
    origin: State,
) -> Cancellable<Option<Attractor>> {
    marks[origin as usize] = Mark::Origin;
    let result = test_origin(relation, marks, origin);
    match &result {
        Ok(Some(attractor)) => {
            for state in attractor.states() {
                marks[*state as usize] = Mark::Finalized;
            }
        }
        Ok(None) => marks[origin as usize] = Mark::Finalized,
        Err(_) => marks[origin as usize] = Mark::Unvisited,
    }
    result
}

fn test_origin(
    relation: &TransitionRelation,
    marks: &mut [Mark],
    origin: State,
) -> Cancellable<Option<Attractor>> {
    let mut reachable = Vec::new();
    let outcome = search(
        relation,
        marks,
        origin,
        SearchMode::CollectFull,
        &mut reachable,
    );
    reset_visited(marks, &reachable);
    match outcome? {
        Outcome::FoundOrigin => (),
        Outcome::NotFound => {
            debug!("Origin {origin} is transient (no cycle).");
            return Ok(None);
        }
        Outcome::ReachedFinalized => {
            debug!("Origin {origin} is transient (reaches known states).");
            return Ok(None);
        }
    }

    // The origin lies on a cycle. It is in an attractor iff it can be reached back
    // from every reachable state.
    let mut probed = Vec::new();
    for member in &reachable {
        probed.clear();
        let outcome = search(
            relation,
            marks,
            *member,
            SearchMode::ProbeEarlyExit,
            &mut probed,
        );
        reset_visited(marks, &probed);
        if outcome? != Outcome::FoundOrigin {
            debug!("Origin {origin} is transient (cannot return from {member}).");
            return Ok(None);
        }
        trace!("Origin {origin} is reachable from {member}.");
    }

    reachable.push(origin);
    Ok(Some(Attractor::new(reachable)))
}
