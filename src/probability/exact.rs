use crate::attractor::Attractor;
use crate::log_states;
use crate::probability::{Distribution, ProbabilityError, local_transitions};
use crate::transition::{SLOTS, State, TransitionRelation};
use cancel_this::is_cancelled;
use log::{debug, info};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

/// Stationary probabilities represented as exact fractions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactDistribution {
    states: Vec<State>,
    ratios: Vec<BigRational>,
}

impl ExactDistribution {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn ratios(&self) -> &[BigRational] {
        &self.ratios
    }

    /// The probabilities as fractions (`"2/17"`, or `"1"` for integers).
    pub fn fractions(&self) -> Vec<String> {
        self.ratios.iter().map(|it| it.to_string()).collect()
    }

    /// Evaluate the fractions as floating point numbers.
    pub fn to_distribution(&self) -> Result<Distribution, ProbabilityError> {
        let probabilities = self
            .ratios
            .iter()
            .map(|it| {
                it.to_f64()
                    .ok_or_else(|| ProbabilityError::Unrepresentable(it.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Distribution {
            states: self.states.clone(),
            probabilities,
        })
    }
}

/// Compute the stationary distribution of `attractor` exactly.
///
/// For each state `a` of the attractor, the probability flowing into `a` must equal the
/// probability flowing out of it:
///
/// ```text
/// sum_b m(b -> a) * p(b) - 4 * p(a) = 0
/// ```
///
/// where `m(b -> a)` counts the slots of `b` leading to `a`. One of these equations is
/// redundant and is replaced by `sum p = 1`. The system is then solved using Gauss-Jordan
/// elimination over arbitrary precision rationals, so that no rounding error reaches the
/// logarithms in the complexity measures.
pub fn exact_probabilities(
    relation: &TransitionRelation,
    attractor: &Attractor,
) -> Result<ExactDistribution, ProbabilityError> {
    let transitions = local_transitions(relation, attractor)?;
    info!(
        "Solving balance equations for attractor ({}).",
        log_states(attractor.states())
    );

    let system = balance_system(&transitions);
    let ratios = solve(system)?;

    Ok(ExactDistribution {
        states: attractor.states().to_vec(),
        ratios,
    })
}

/// Build the augmented matrix `[A | b]` of the balance equations.
fn balance_system(transitions: &[[usize; SLOTS]]) -> Vec<Vec<BigRational>> {
    let n = transitions.len();
    let mut rows = vec![vec![BigRational::zero(); n + 1]; n];
    for (column, targets) in transitions.iter().enumerate() {
        for target in targets {
            rows[*target][column] += BigRational::one();
        }
        rows[column][column] -= BigRational::from_integer(BigInt::from(SLOTS));
    }

    let normalization = &mut rows[n - 1];
    normalization.fill(BigRational::one());
    normalization[n] = BigRational::one();
    rows
}

/// Solve a square augmented system with Gauss-Jordan elimination.
fn solve(mut rows: Vec<Vec<BigRational>>) -> Result<Vec<BigRational>, ProbabilityError> {
    let n = rows.len();
    for column in 0..n {
        is_cancelled!()?;
        let Some(pivot) = (column..n).find(|it| !rows[*it][column].is_zero()) else {
            debug!("No pivot in column {column}; the system is singular.");
            return Err(ProbabilityError::SingularSystem);
        };
        rows.swap(column, pivot);

        let pivot_row = std::mem::take(&mut rows[column]);
        let inverse = pivot_row[column].recip();
        let pivot_row = pivot_row
            .into_iter()
            .map(|it| it * &inverse)
            .collect::<Vec<_>>();

        // The pivot row is temporarily empty, so it is skipped here.
        for row in rows.iter_mut().filter(|it| !it.is_empty()) {
            let factor = row[column].clone();
            if factor.is_zero() {
                continue;
            }
            for (value, pivot_value) in row.iter_mut().zip(&pivot_row).skip(column) {
                *value -= &factor * pivot_value;
            }
        }
        rows[column] = pivot_row;
    }

    Ok(rows.into_iter().map(|mut it| it.swap_remove(n)).collect())
}
