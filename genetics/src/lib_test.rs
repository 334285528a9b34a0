use super::*;
use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fitness is the sum of the genes, clamped at zero.
#[derive(Clone, Debug, PartialEq)]
struct Summed {
    chromosome: Chromosome,
}

impl Individual for Summed {
    fn create(chromosome: Chromosome) -> Self {
        Self { chromosome }
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn fitness(&self) -> f32 {
        self.chromosome.iter().sum::<f32>().max(0.0)
    }
}

fn individual(genes: &[f32]) -> Summed {
    Summed::create(genes.iter().copied().collect())
}

fn algorithm() -> GeneticAlgorithm<RouletteWheelSelection, UniformCrossover, GaussianMutation> {
    GeneticAlgorithm::new(
        RouletteWheelSelection,
        UniformCrossover,
        GaussianMutation::new(0.5, 0.5).expect("valid chance"),
    )
}

fn population() -> Vec<Summed> {
    vec![
        individual(&[0.0, 0.0, 0.0]),
        individual(&[1.0, 1.0, 1.0]),
        individual(&[1.0, 2.0, 1.0]),
        individual(&[1.0, 2.0, 4.0]),
    ]
}

fn average_fitness(population: &[Summed]) -> f32 {
    Statistics::new(population).avg_fitness
}

#[test]
fn evolve_keeps_population_size_and_gene_count() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let (next, _) = algorithm().evolve(&mut rng, &population()).expect("evolve");

    assert_eq!(next.len(), 4);
    assert!(next.iter().all(|i| i.chromosome().len() == 3));
}

#[test]
fn evolve_reports_statistics_of_the_input_generation() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let (_, stats) = algorithm().evolve(&mut rng, &population()).expect("evolve");

    assert_relative_eq!(stats.min_fitness, 0.0);
    assert_relative_eq!(stats.max_fitness, 7.0);
    assert_relative_eq!(stats.avg_fitness, (0.0 + 3.0 + 4.0 + 7.0) / 4.0);
}

#[test]
fn evolve_improves_average_fitness_over_generations() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let ga = algorithm();
    let initial = population();

    let mut current = initial.clone();
    for _ in 0..10 {
        current = ga.evolve(&mut rng, &current).expect("evolve").0;
    }

    assert!(average_fitness(&current) > average_fitness(&initial));
}

#[test]
fn evolve_is_deterministic_for_a_seed() {
    let ga = algorithm();
    let a = ga.evolve(&mut ChaCha8Rng::seed_from_u64(9), &population()).expect("evolve").0;
    let b = ga.evolve(&mut ChaCha8Rng::seed_from_u64(9), &population()).expect("evolve").0;
    assert_eq!(a, b);
}

#[test]
fn evolve_rejects_empty_population() {
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let err = algorithm()
        .evolve::<Summed>(&mut rng, &[])
        .expect_err("empty population");
    assert_eq!(err, GeneticsError::EmptyPopulation);
}

// --- Statistics ---

#[test]
fn statistics_of_empty_population_are_zero() {
    let stats = Statistics::new::<Summed>(&[]);
    assert_relative_eq!(stats.min_fitness, 0.0);
    assert_relative_eq!(stats.max_fitness, 0.0);
    assert_relative_eq!(stats.avg_fitness, 0.0);
}

#[test]
fn statistics_display_uses_two_decimals() {
    let stats = Statistics { min_fitness: 1.0, max_fitness: 12.5, avg_fitness: 4.333 };
    assert_eq!(stats.to_string(), "min=1.00, max=12.50, avg=4.33");
}
