use crate::attractor::search::{Mark, resolve_origin};
use crate::attractor::{Attractor, AttractorConfig};
use crate::log_states;
use crate::transition::{State, TransitionRelation};
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::info;

/// Internal state of the origin search attractor algorithm.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OriginSearchState {
    marks: Vec<Mark>,
    next_origin: usize,
    iteration: usize,
}

/// Step implementation for the origin search attractor algorithm.
///
/// Each step tests one origin state and implements the [`GeneratorStep`] trait for
/// attractor enumeration.
pub struct OriginSearchStep;

impl GeneratorStep<AttractorConfig, OriginSearchState, Attractor> for OriginSearchStep {
    fn step(
        context: &AttractorConfig,
        state: &mut OriginSearchState,
    ) -> Completable<Option<Attractor>> {
        // Origins that are already resolved are skipped entirely.
        while state
            .marks
            .get(state.next_origin)
            .is_some_and(|it| *it == Mark::Finalized)
        {
            state.next_origin += 1;
        }

        if state.next_origin >= state.marks.len() {
            debug_assert!(state.marks.iter().all(|it| *it == Mark::Finalized));
            info!(
                "Origin search finished after {} iterations.",
                state.iteration
            );
            return Ok(None);
        }

        if state.iteration >= context.max_iterations {
            info!(
                "[iteration:{}] Origin search canceled (exceeded iteration count).",
                state.iteration
            );
            return Err(Cancelled::new("AttractorConfig::max_iterations").into());
        }

        let origin = state.next_origin as State;
        let attractor = resolve_origin(&context.relation, &mut state.marks, origin)?;
        state.iteration += 1;
        state.next_origin += 1;

        match attractor {
            Some(attractor) => {
                info!(
                    "[iteration:{}] Found attractor ({}).",
                    state.iteration,
                    log_states(attractor.states())
                );
                Ok(Some(attractor))
            }
            None => Err(Suspended),
        }
    }
}

impl From<&TransitionRelation> for OriginSearchState {
    fn from(value: &TransitionRelation) -> Self {
        OriginSearchState {
            marks: vec![Mark::Unvisited; value.num_states()],
            next_origin: 0,
            iteration: 0,
        }
    }
}

impl From<&AttractorConfig> for OriginSearchState {
    fn from(value: &AttractorConfig) -> Self {
        OriginSearchState::from(&value.relation)
    }
}

impl OriginSearchState {
    /// The number of origins tested so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}
