use crate::reachability::{ReachabilityConfig, ReachabilityState, ReachabilityStep};
use crate::transition::State;
use crate::{log_states, simple_type_name};
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;
use std::collections::BTreeSet;
use std::marker::PhantomData;

/// A [`ComputationStep`] that keeps adding the states discovered by a [`ReachabilityStep`]
/// to the explicit set in `state`, until nothing new is discovered.
///
/// Each call adds one layer, so the computation suspends once per layer.
pub struct IterativeUnion<S: ReachabilityStep>(PhantomData<S>);

impl<S: ReachabilityStep> ComputationStep<ReachabilityConfig, ReachabilityState, BTreeSet<State>>
    for IterativeUnion<S>
{
    fn step(
        context: &ReachabilityConfig,
        state: &mut ReachabilityState,
    ) -> Completable<BTreeSet<State>> {
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] {} stopped after reaching the layer limit ({}).",
                state.iteration,
                simple_type_name::<S>(),
                log_states(&state.set)
            );
            return Err(Cancelled::new("ReachabilityConfig::max_iterations").into());
        }
        state.iteration += 1;

        let layer = S::step(context, &state.set)?;
        if layer.is_empty() {
            debug!(
                "[iteration:{}] {} found no new states; reachable set is closed ({}).",
                state.iteration,
                simple_type_name::<S>(),
                log_states(&state.set)
            );
            return Ok(state.set.clone());
        }

        let added = layer.len();
        state.set.extend(layer);
        debug!(
            "[iteration:{}] {} added {} states ({}).",
            state.iteration,
            simple_type_name::<S>(),
            added,
            log_states(&state.set)
        );
        Err(Suspended)
    }
}
