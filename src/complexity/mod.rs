//! Information-theoretic complexity measures of stationary distributions.
//!
//! Both measures report the Shannon entropy of the distribution together with a
//! complexity value:
//!
//! - [`information_fluctuation`]: The standard deviation of the self-information
//!   `-log2 p(s)` of the attractor states. It measures how unevenly information is spread
//!   across the attractor rather than its average level.
//! - [`net_information_gain`]: The root mean square of the change of self-information over
//!   a single transition between two distinct states.


use crate::attractor::Attractor;
use crate::probability::Distribution;
use crate::transition::{SLOTS, TransitionRelation};
use log::debug;

/// Entropy and complexity of one distribution (both in bits).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complexity {
    pub entropy: f64,
    pub complexity: f64,
}

impl Complexity {
    /// The ratio `complexity / entropy`, or `None` if it is indeterminate (zero entropy).
    pub fn ratio(&self) -> Option<f64> {
        if self.entropy == 0.0 {
            None
        } else {
            Some(self.complexity / self.entropy)
        }
    }
}

/// Selects one of the supported complexity measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComplexityMeasure {
    /// See [`information_fluctuation`].
    #[default]
    InformationFluctuation,
    /// See [`net_information_gain`].
    NetInformationGain,
}

impl ComplexityMeasure {
    /// Compute this measure for a distribution of `attractor`.
    pub fn compute(
        &self,
        relation: &TransitionRelation,
        attractor: &Attractor,
        distribution: &Distribution,
    ) -> Complexity {
        match self {
            ComplexityMeasure::InformationFluctuation => information_fluctuation(distribution),
            ComplexityMeasure::NetInformationGain => {
                net_information_gain(relation, attractor, distribution)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComplexityMeasure::InformationFluctuation => "primary",
            ComplexityMeasure::NetInformationGain => "secondary",
        }
    }
}

/// Self-information of an event with probability `p > 0`.
fn information(p: f64) -> f64 {
    // Subtraction (instead of negation) keeps `p = 1` at positive zero.
    0.0 - p.log2()
}

fn entropy(distribution: &Distribution) -> f64 {
    distribution
        .probabilities()
        .iter()
        .filter(|p| **p > 0.0)
        .map(|p| p * information(*p))
        .sum()
}

/// Information fluctuation complexity: the standard deviation of self-information.
///
/// States with zero probability are ignored.
pub fn information_fluctuation(distribution: &Distribution) -> Complexity {
    let entropy = entropy(distribution);
    let second_moment: f64 = distribution
        .probabilities()
        .iter()
        .filter(|p| **p > 0.0)
        .map(|p| p * information(*p).powi(2))
        .sum();
    // Rounding can make a zero variance slightly negative.
    let complexity = (second_moment - entropy * entropy).max(0.0).sqrt();
    debug!("Information fluctuation: entropy={entropy}; complexity={complexity}.");
    Complexity {
        entropy,
        complexity,
    }
}

/// Net information gain complexity.
///
/// For every transition `a -> b` between distinct states of non-zero probability, taken by
/// `m` of the four slots of `a`, this accumulates `p(a) * (info(b) - info(a))^2 * m / 4`.
/// The complexity is the square root of the sum.
///
/// The `distribution` must be synchronized with `attractor`.
pub fn net_information_gain(
    relation: &TransitionRelation,
    attractor: &Attractor,
    distribution: &Distribution,
) -> Complexity {
    debug_assert_eq!(attractor.states(), distribution.states());
    let probabilities = distribution.probabilities();
    let mut gain = 0.0;
    for (source, p_source) in distribution.iter() {
        if p_source == 0.0 {
            continue;
        }
        let info_source = information(p_source);
        for target in relation.distinct_successors(source) {
            let Some(target_index) = attractor.index_of(target) else {
                continue;
            };
            let p_target = probabilities[target_index];
            if target == source || p_target == 0.0 {
                continue;
            }
            let delta = information(p_target) - info_source;
            let weight = relation.multiplicity(source, target) as f64 / SLOTS as f64;
            gain += p_source * delta * delta * weight;
        }
    }

    let entropy = entropy(distribution);
    let complexity = gain.sqrt();
    debug!("Net information gain: entropy={entropy}; complexity={complexity}.");
    Complexity {
        entropy,
        complexity,
    }
}
