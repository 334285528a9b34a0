use std::collections::BTreeMap;

use super::*;
use crate::Chromosome;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
struct Scored {
    fitness: f32,
    chromosome: Chromosome,
}

impl Scored {
    fn new(fitness: f32) -> Self {
        Self { fitness, chromosome: Chromosome::default() }
    }
}

impl Individual for Scored {
    fn create(chromosome: Chromosome) -> Self {
        Self { fitness: 0.0, chromosome }
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn fitness(&self) -> f32 {
        self.fitness
    }
}

fn histogram(population: &[Scored], draws: usize) -> BTreeMap<i32, usize> {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let mut histogram = BTreeMap::new();
    for _ in 0..draws {
        let picked = RouletteWheelSelection
            .select(&mut rng, population)
            .expect("non-empty population");
        #[allow(clippy::cast_possible_truncation)]
        let key = picked.fitness as i32;
        *histogram.entry(key).or_insert(0) += 1;
    }
    histogram
}

#[test]
fn picks_proportionally_to_fitness() {
    let population = vec![Scored::new(2.0), Scored::new(1.0), Scored::new(4.0), Scored::new(3.0)];
    let histogram = histogram(&population, 10_000);

    // Expected shares are 10%, 20%, 30%, 40% of 10k draws.
    for (fitness, expected) in [(1, 1000), (2, 2000), (3, 3000), (4, 4000)] {
        let actual = histogram.get(&fitness).copied().unwrap_or(0);
        assert!(
            actual.abs_diff(expected) < 250,
            "fitness {fitness}: got {actual} draws, expected about {expected}"
        );
    }
}

#[test]
fn never_picks_zero_fitness_when_others_scored() {
    let population = vec![Scored::new(0.0), Scored::new(5.0)];
    let histogram = histogram(&population, 500);
    assert_eq!(histogram.get(&0), None);
    assert_eq!(histogram.get(&5), Some(&500));
}

#[test]
fn all_zero_fitness_falls_back_to_uniform() {
    let population = vec![Scored::new(0.0), Scored::new(0.0), Scored::new(0.0)];
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let mut counts = [0_usize; 3];

    for _ in 0..3_000 {
        let picked = RouletteWheelSelection
            .select(&mut rng, &population)
            .expect("non-empty population");
        let index = population
            .iter()
            .position(|individual| std::ptr::eq(individual, picked))
            .expect("picked from population");
        counts[index] += 1;
    }

    // About 1000 each.
    for (index, count) in counts.iter().enumerate() {
        assert!((800..=1200).contains(count), "individual {index}: {count} draws");
    }
}

#[test]
fn empty_population_is_an_error() {
    let population: Vec<Scored> = Vec::new();
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let err = RouletteWheelSelection
        .select(&mut rng, &population)
        .expect_err("empty population");
    assert_eq!(err, GeneticsError::EmptyPopulation);
}
