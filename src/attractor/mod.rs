//! Attractor enumeration for explicit transition relations.
//!
//! An **attractor** is a closed, terminal strongly connected set of states: once the
//! automaton enters it, it never leaves, and every member is reachable from every other
//! member. States that belong to no attractor are *transient*.
//!
//! # Algorithms
//!
//! - [`OriginSearchAttractors`]: A generator that tries every state (in ascending order) as
//!   the origin of a new attractor. It collects everything reachable from the origin and
//!   accepts the set if the origin can be reached back from each member. States are never
//!   reconsidered once they are known to be transient or part of an attractor.
//!
//! # Typical usage
//!
//! ```
//! use eca_complexity::TransitionRelation;
//! use eca_complexity::attractor::{AttractorConfig, OriginSearchAttractors, OriginSearchState};
//! use computation_process::Stateful;
//!
//! let relation = TransitionRelation::build(232, 3);
//! let config = AttractorConfig::new(relation.clone());
//! let initial_state = OriginSearchState::from(&relation);
//! for attractor in OriginSearchAttractors::configure(config, initial_state) {
//!     let attractor = attractor.unwrap();
//!     println!("Attractor has {} states.", attractor.len());
//! }
//! ```
//!
//! For most purposes, [`find_attractors`] is sufficient.

mod attractor_config;
mod attractor_states;
mod origin_search;
mod search;


use crate::reachability::BackwardReachability;
use crate::transition::{State, TransitionRelation};
pub use attractor_config::AttractorConfig;
pub use attractor_states::Attractor;
use cancel_this::Cancellable;
use computation_process::{Computable, Generator, Stateful};
pub use origin_search::{OriginSearchState, OriginSearchStep};
use std::collections::BTreeSet;

/// Enumerate attractors by testing every state as a potential origin.
pub type OriginSearchAttractors =
    Generator<AttractorConfig, OriginSearchState, Attractor, OriginSearchStep>;

/// Compute all attractors of the given relation, ordered by their lowest state.
pub fn find_attractors(relation: &TransitionRelation) -> Cancellable<Vec<Attractor>> {
    OriginSearchAttractors::configure(relation, relation).collect()
}

/// Compute the basin of the given attractor, i.e., all states that can reach it
/// (including the attractor itself).
///
/// Note that the basins of different attractors can overlap.
pub fn basin_of(
    relation: &TransitionRelation,
    attractor: &Attractor,
) -> Cancellable<BTreeSet<State>> {
    let initial = attractor.states().iter().copied().collect::<BTreeSet<_>>();
    BackwardReachability::configure(relation, initial).compute()
}
