use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn parents() -> (Chromosome, Chromosome) {
    let a: Chromosome = (1..=100).map(|n| n as f32).collect();
    let b: Chromosome = (1..=100).map(|n| -n as f32).collect();
    (a, b)
}

#[test]
fn child_takes_each_gene_from_a_parent() {
    let (a, b) = parents();
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let child = UniformCrossover.crossover(&mut rng, &a, &b).expect("crossover");

    assert_eq!(child.len(), 100);
    for (i, gene) in child.iter().enumerate() {
        assert!(gene.to_bits() == a[i].to_bits() || gene.to_bits() == b[i].to_bits());
    }
}

#[test]
fn child_mixes_both_parents_roughly_evenly() {
    let (a, b) = parents();
    let mut rng = ChaCha8Rng::from_seed(Default::default());
    let child = UniformCrossover.crossover(&mut rng, &a, &b).expect("crossover");

    let from_a = child.iter().zip(a.iter()).filter(|(c, a)| c.to_bits() == a.to_bits()).count();
    let from_b = child.len() - from_a;

    assert!((30..=70).contains(&from_a), "from_a = {from_a}");
    assert!((30..=70).contains(&from_b), "from_b = {from_b}");
}

#[test]
fn mismatched_parents_are_rejected() {
    let a: Chromosome = vec![1.0, 2.0].into_iter().collect();
    let b: Chromosome = vec![1.0].into_iter().collect();
    let mut rng = ChaCha8Rng::from_seed(Default::default());

    let err = UniformCrossover.crossover(&mut rng, &a, &b).expect_err("length mismatch");
    assert_eq!(err, GeneticsError::ChromosomeLength { left: 2, right: 1 });
}
