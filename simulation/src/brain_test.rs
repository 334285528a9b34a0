use super::*;
use crate::Config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn eye() -> Eye {
    Eye::from_config(&Config { eye_cells: 3, ..Config::default() })
}

#[test]
fn chromosome_covers_every_parameter() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let brain = Brain::random(&mut rng, &eye()).expect("brain");

    // (3 + 1) * 6 hidden + (6 + 1) * 2 outputs.
    assert_eq!(brain.as_chromosome().len(), 24 + 14);
}

#[test]
fn chromosome_round_trip_rebuilds_the_same_brain() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let brain = Brain::random(&mut rng, &eye()).expect("brain");

    let rebuilt = Brain::from_chromosome(brain.as_chromosome(), &eye()).expect("rebuild");
    assert_eq!(rebuilt, brain);
}

#[test]
fn from_chromosome_rejects_wrong_length() {
    let chromosome: Chromosome = vec![0.0; 5].into_iter().collect();
    let err = Brain::from_chromosome(chromosome, &eye()).expect_err("short chromosome");
    assert!(matches!(err, SimulationError::Network(network::NetworkError::NotEnoughWeights)));
}

#[test]
fn decide_returns_two_non_negative_outputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let brain = Brain::random(&mut rng, &eye()).expect("brain");

    let (speed, rotation) = brain.decide(vec![0.2, 0.9, 0.0]).expect("decide");
    assert!(speed >= 0.0);
    assert!(rotation >= 0.0);
}

#[test]
fn decide_rejects_wrong_vision_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let brain = Brain::random(&mut rng, &eye()).expect("brain");

    let err = brain.decide(vec![0.0; 9]).expect_err("wrong input size");
    assert!(matches!(err, SimulationError::Network(network::NetworkError::InputSize { expected: 3, actual: 9 })));
}
