use crate::attractor::{Attractor, find_attractors};
use crate::probability::{ProbabilityError, estimate_probabilities, exact_probabilities};
use crate::test_utils::{assert_close, init_logger};
use crate::transition::TransitionRelation;
use num_rational::BigRational;
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn single_attractor(rule: u8, length: usize) -> (TransitionRelation, Attractor) {
    let relation = TransitionRelation::build(rule, length);
    let mut attractors = find_attractors(&relation).unwrap();
    assert_eq!(attractors.len(), 1);
    (relation, attractors.remove(0))
}

#[test]
fn test_exact_rule_110_length_3() -> Result<(), ProbabilityError> {
    init_logger();
    let (relation, attractor) = single_attractor(110, 3);
    let exact = exact_probabilities(&relation, &attractor)?;
    assert_eq!(
        exact.fractions().join(", "),
        "2/17, 2/17, 1/34, 5/34, 2/17, 2/17, 2/17, 4/17"
    );
    assert_eq!(exact.states(), attractor.states());

    let distribution = exact.to_distribution()?;
    assert_close(distribution.probability_of(2).unwrap(), 1.0 / 34.0, 1e-15);
    assert_close(distribution.probability_of(7).unwrap(), 4.0 / 17.0, 1e-15);
    assert_eq!(distribution.probability_of(8), None);
    Ok(())
}

#[test]
fn test_exact_rule_110_length_2() -> Result<(), ProbabilityError> {
    let (relation, attractor) = single_attractor(110, 2);
    let exact = exact_probabilities(&relation, &attractor)?;
    assert_eq!(exact.fractions(), vec!["1/5", "1/5", "1/5", "2/5"]);
    Ok(())
}

#[test]
fn test_exact_fixed_point() -> Result<(), ProbabilityError> {
    init_logger();
    let (relation, attractor) = single_attractor(0, 3);
    assert_eq!(attractor.states(), &[0]);
    let exact = exact_probabilities(&relation, &attractor)?;
    assert_eq!(exact.fractions(), vec!["1"]);
    assert_eq!(exact.to_distribution()?.probabilities(), &[1.0]);
    Ok(())
}

#[test]
fn test_exact_uneven_cycle() -> Result<(), ProbabilityError> {
    // Rule 28: state 2 stays with probability 1/2, state 3 always returns to 2.
    let relation = TransitionRelation::build(28, 3);
    let attractors = find_attractors(&relation).unwrap();
    let exact = exact_probabilities(&relation, &attractors[0])?;
    assert_eq!(exact.fractions(), vec!["1/2", "1/2"]);
    let exact = exact_probabilities(&relation, &attractors[1])?;
    assert_eq!(attractors[1].states(), &[2, 3]);
    assert_eq!(exact.fractions(), vec!["2/3", "1/3"]);
    Ok(())
}

#[test]
fn test_exact_sums_to_one() -> Result<(), ProbabilityError> {
    for length in 1..=4 {
        for rule in (0..=255u8).step_by(3) {
            let relation = TransitionRelation::build(rule, length);
            for attractor in find_attractors(&relation)? {
                let exact = exact_probabilities(&relation, &attractor)?;
                let sum = exact
                    .ratios()
                    .iter()
                    .fold(BigRational::zero(), |acc, it| acc + it);
                assert!(sum.is_one(), "rule {rule}, length {length}");
                assert!(exact.ratios().iter().all(|it| *it > BigRational::zero()));

                let distribution = exact.to_distribution()?;
                assert_close(distribution.total(), 1.0, 1e-9);
            }
        }
    }
    Ok(())
}

#[test]
fn test_exact_is_stationary() -> Result<(), ProbabilityError> {
    // One random step must not change the distribution.
    let (relation, attractor) = single_attractor(110, 4);
    let distribution = exact_probabilities(&relation, &attractor)?.to_distribution()?;
    for (target, probability) in distribution.iter() {
        let inflow = distribution
            .iter()
            .map(|(source, p)| p * relation.multiplicity(source, target) as f64 / 4.0)
            .sum::<f64>();
        assert_close(inflow, probability, 1e-12);
    }
    Ok(())
}

#[test]
fn test_singular_system() {
    init_logger();
    // Rule 204 is the identity, so {0, 1} is closed but contains two fixed points.
    let relation = TransitionRelation::build(204, 2);
    let result = exact_probabilities(&relation, &Attractor::new([0, 1]));
    assert!(matches!(result, Err(ProbabilityError::SingularSystem)));

    // The whole space of rule 232 contains transient states and two fixed points.
    let relation = TransitionRelation::build(232, 3);
    let result = exact_probabilities(&relation, &Attractor::whole_space(&relation));
    assert!(matches!(result, Err(ProbabilityError::SingularSystem)));
}

#[test]
fn test_not_closed() {
    let relation = TransitionRelation::build(110, 3);
    let open = Attractor::new([0, 1]);
    let result = exact_probabilities(&relation, &open);
    assert!(matches!(result, Err(ProbabilityError::NotClosed { state: 3 })));

    let mut rng = StdRng::seed_from_u64(7);
    let result = estimate_probabilities(&relation, &open, 100, &mut rng);
    assert!(matches!(result, Err(ProbabilityError::NotClosed { state: 3 })));
}

#[test]
fn test_zero_iterations() {
    let (relation, attractor) = single_attractor(110, 3);
    let mut rng = StdRng::seed_from_u64(7);
    let result = estimate_probabilities(&relation, &attractor, 0, &mut rng);
    assert!(matches!(result, Err(ProbabilityError::ZeroIterations)));
}

#[test]
fn test_estimate_matches_exact() -> Result<(), ProbabilityError> {
    init_logger();
    let (relation, attractor) = single_attractor(110, 3);
    let exact = exact_probabilities(&relation, &attractor)?.to_distribution()?;

    let mut rng = StdRng::seed_from_u64(42);
    let estimate = estimate_probabilities(&relation, &attractor, 1_000_000, &mut rng)?;
    assert_eq!(estimate.states(), exact.states());
    assert_close(estimate.total(), 1.0, 1e-9);
    for (estimated, expected) in estimate.probabilities().iter().zip(exact.probabilities()) {
        assert_close(*estimated, *expected, 0.01);
    }
    Ok(())
}

#[test]
fn test_estimate_is_reproducible() -> Result<(), ProbabilityError> {
    let (relation, attractor) = single_attractor(110, 3);
    let mut rng = StdRng::seed_from_u64(1);
    let first = estimate_probabilities(&relation, &attractor, 10_000, &mut rng)?;
    let mut rng = StdRng::seed_from_u64(1);
    let second = estimate_probabilities(&relation, &attractor, 10_000, &mut rng)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_estimate_fixed_point() -> Result<(), ProbabilityError> {
    let relation = TransitionRelation::build(0, 3);
    let attractor = Attractor::new([0]);
    let mut rng = StdRng::seed_from_u64(3);
    let estimate = estimate_probabilities(&relation, &attractor, 10, &mut rng)?;
    assert_eq!(estimate.probabilities(), &[1.0]);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_exact_distribution_serialization() -> Result<(), ProbabilityError> {
    use crate::probability::ExactDistribution;

    let (relation, attractor) = single_attractor(110, 2);
    let exact = exact_probabilities(&relation, &attractor)?;
    let json = serde_json::to_string(&exact).unwrap();
    let restored: ExactDistribution = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, exact);
    Ok(())
}
