use crate::attractor::Attractor;
use crate::reachability::ForwardReachability;
use crate::transition::{State, TransitionRelation};
use cancel_this::Cancellable;
use computation_process::{Computable, Stateful};
use std::collections::BTreeSet;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Compute the forward reachable set of a single state.
pub fn forward_of(relation: &TransitionRelation, state: State) -> Cancellable<BTreeSet<State>> {
    ForwardReachability::configure(relation, state).compute()
}

/// Reference attractor detection: a state is in an attractor iff it can be reached
/// back from everything it can reach. The attractor is then its forward set.
///
/// This is quadratic and only meant for validating results on small relations.
pub fn naive_attractors(relation: &TransitionRelation) -> Cancellable<Vec<BTreeSet<State>>> {
    let forward = relation
        .states()
        .map(|it| forward_of(relation, it))
        .collect::<Cancellable<Vec<_>>>()?;

    let mut result = Vec::new();
    for state in relation.states() {
        let reachable = &forward[state as usize];
        let is_bottom = reachable
            .iter()
            .all(|it| forward[*it as usize].contains(&state));
        if is_bottom && reachable.first() == Some(&state) {
            // Report each attractor once, from its lowest state.
            result.push(reachable.clone());
        }
    }
    Ok(result)
}

/// Verify that the attractors found match the expected attractors exactly.
///
/// Both are compared as lists of ascending state lists, ordered by their lowest state.
pub fn assert_attractors(found: &[Attractor], expected: &[&[State]]) {
    let mut found = found
        .iter()
        .map(|it| it.states().to_vec())
        .collect::<Vec<_>>();
    found.sort();
    let mut expected = expected.iter().map(|it| it.to_vec()).collect::<Vec<_>>();
    expected.sort();
    assert_eq!(
        found.len(),
        expected.len(),
        "Expected {} attractors, but found {}: {:?}",
        expected.len(),
        found.len(),
        found
    );
    for (i, (found, expected)) in found.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            found, expected,
            "Attractor {} mismatch: expected {:?}, found {:?}",
            i, expected, found
        );
    }
}

/// Assert that two floating point values are equal up to `tolerance`.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected}, found {actual} (tolerance {tolerance})"
    );
}
