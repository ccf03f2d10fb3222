use crate::attractor::Attractor;
use crate::log_states;
use crate::probability::{Distribution, ProbabilityError, local_transitions};
use crate::transition::{SLOTS, TransitionRelation};
use cancel_this::is_cancelled;
use log::info;
use rand::Rng;

/// How often (in simulation steps) the simulation checks for cancellation.
const CANCEL_CHECK_INTERVAL: u64 = 1 << 16;

/// Estimate the stationary distribution of `attractor` using a random walk.
///
/// The walk starts in [`Attractor::representative`] and in each step moves to one of the
/// four successor slots, chosen uniformly using `rng`. The probability of a state is the
/// fraction of steps that ended in it.
///
/// Use a seeded generator to make the result reproducible.
pub fn estimate_probabilities<R: Rng + ?Sized>(
    relation: &TransitionRelation,
    attractor: &Attractor,
    iterations: u64,
    rng: &mut R,
) -> Result<Distribution, ProbabilityError> {
    if iterations == 0 {
        return Err(ProbabilityError::ZeroIterations);
    }

    let transitions = local_transitions(relation, attractor)?;
    info!(
        "Simulating {iterations} steps in attractor ({}).",
        log_states(attractor.states())
    );

    let mut visits = vec![0u64; attractor.len()];
    let mut current = 0usize;
    for iteration in 0..iterations {
        if iteration % CANCEL_CHECK_INTERVAL == 0 {
            is_cancelled!()?;
        }
        current = transitions[current][rng.gen_range(0..SLOTS)];
        visits[current] += 1;
    }

    let total = iterations as f64;
    let probabilities = visits.into_iter().map(|it| it as f64 / total).collect();
    Ok(Distribution::new(attractor, probabilities))
}
