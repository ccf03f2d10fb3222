use crate::transition::State;

#[cfg(test)]
mod test_utils;

pub mod attractor;
pub mod complexity;
pub mod probability;
pub mod reachability;
pub mod transition;

pub use attractor::{Attractor, basin_of, find_attractors};
pub use complexity::{Complexity, ComplexityMeasure, information_fluctuation, net_information_gain};
pub use probability::{
    Distribution, ExactDistribution, ProbabilityError, estimate_probabilities,
    exact_probabilities,
};
pub use transition::{Rule, TransitionRelation};

/// A utility method for printing useful metadata of explicit state sets.
fn log_states<'a>(states: impl IntoIterator<Item = &'a State>) -> String {
    let mut count = 0usize;
    let mut lowest: Option<State> = None;
    for state in states {
        count += 1;
        lowest = Some(lowest.map_or(*state, |it| it.min(*state)));
    }
    match lowest {
        Some(lowest) => format!("elements={count}; lowest={lowest}"),
        None => "elements=0".to_string(),
    }
}

/// Extract the "simple name" of a type argument at compile time.
///
/// In the future, this should be a `const fn`, but `type_name` and `unwrap_or` are not
/// yet stabilized as `const` functions (even thought they probably are).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
