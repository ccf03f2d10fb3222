//! Explicit-state reachability algorithms over a [`TransitionRelation`].
//!
//! The procedures compute forward and backward reachable sets by repeatedly extending the
//! current set with its direct successors (or predecessors) until a fixed point is reached.
//! Each extension is one resumable step of a [`Computation`], so long explorations can be
//! interleaved, cancelled, or (with the `serde` feature) suspended and restored.
//!
//! # Type Aliases
//!
//! - [`ForwardReachability`]: Forward reachability in BFS order.
//! - [`BackwardReachability`]: Backward reachability in BFS order.
//!
//! # Example
//!
//! ```
//! use eca_complexity::TransitionRelation;
//! use eca_complexity::reachability::ForwardReachability;
//! use computation_process::{Computable, Stateful};
//! use std::collections::BTreeSet;
//!
//! let relation = TransitionRelation::build(110, 3);
//! let mut forward = ForwardReachability::configure(&relation, BTreeSet::from([1u32]));
//! let reachable = forward.compute().unwrap();
//! assert_eq!(reachable.len(), 8);
//! ```
//!
//! [`TransitionRelation`]: crate::TransitionRelation

use crate::transition::State;
use cancel_this::Cancellable;
use computation_process::Computation;
use std::collections::BTreeSet;


mod iterative_union;
mod reachability_config;
mod reachability_state;
mod step_operators;

pub use iterative_union::IterativeUnion;
pub use reachability_config::ReachabilityConfig;
pub use reachability_state::ReachabilityState;
pub use step_operators::{BfsPredecessors, BfsSuccessors};

/// A helper alias which allows us to use [`ReachabilityComputation`] as shorthand for
/// `Computation<Context = ReachabilityConfig, State = ReachabilityState>`.
pub type ReachabilityComputation<STEP> =
    Computation<ReachabilityConfig, ReachabilityState, BTreeSet<State>, STEP>;

/// A type alias for forward reachability that explores the relation layer by layer.
pub type ForwardReachability = ReachabilityComputation<IterativeUnion<BfsSuccessors>>;

/// A type alias for backward reachability that explores the relation layer by layer.
///
/// Predecessors are not indexed, so each layer scans all admissible states. This is
/// fine for the state counts an explicit relation can hold anyway.
pub type BackwardReachability = ReachabilityComputation<IterativeUnion<BfsPredecessors>>;

/// Used to reduce code repetition in various reachability-like algorithms.
///
/// Implementors define a single step of a reachability procedure, which is then
/// iterated by higher-level algorithms like [`IterativeUnion`].
pub trait ReachabilityStep {
    /// Perform a single step of reachability computation.
    ///
    /// Returns the set of newly discovered states (not already in `state`),
    /// or an empty set if no more states can be reached.
    fn step(context: &ReachabilityConfig, state: &BTreeSet<State>) -> Cancellable<BTreeSet<State>>;
}
