//! Results must be bit-identical regardless of worker count.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use partition_cost::SimilarityScorer;

/// Deterministic collection of random partitions: N labelings of n items
/// over a handful of cluster ids.
fn random_partitions(seed: u64, n_partitions: usize, n_items: usize) -> Vec<Vec<f64>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n_partitions)
        .map(|_| {
            (0..n_items)
                .map(|_| rng.random_range(0..6) as f64)
                .collect()
        })
        .collect()
}

#[test]
fn fmeasure_identical_across_worker_counts() {
    let partitions = random_partitions(42, 2, 80);
    let baseline = SimilarityScorer::new()
        .workers(1)
        .fmeasure(&partitions[0], &partitions[1])
        .unwrap();

    for workers in [2, 4, 8] {
        let s = SimilarityScorer::new()
            .workers(workers)
            .fmeasure(&partitions[0], &partitions[1])
            .unwrap();
        assert_eq!(
            s.to_bits(),
            baseline.to_bits(),
            "workers={} diverged",
            workers
        );
    }
}

#[test]
fn aggregate_identical_across_worker_counts() {
    let partitions = random_partitions(7, 10, 60);
    let baseline = SimilarityScorer::new()
        .workers(1)
        .aggregate(&partitions)
        .unwrap();

    for workers in [2, 4, 8] {
        let result = SimilarityScorer::new()
            .workers(workers)
            .aggregate(&partitions)
            .unwrap();

        for (a, b) in result.cost.iter().zip(baseline.cost.iter()) {
            assert_eq!(a.to_bits(), b.to_bits(), "cost diverged at workers={}", workers);
        }
        for (a, b) in result
            .similarity
            .iter()
            .zip(baseline.similarity.iter())
        {
            assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "similarity diverged at workers={}",
                workers
            );
        }
    }
}

#[test]
fn repeated_runs_are_reproducible() {
    let partitions = random_partitions(123, 6, 40);
    let scorer = SimilarityScorer::new().workers(4);

    let first = scorer.aggregate(&partitions).unwrap();
    let second = scorer.aggregate(&partitions).unwrap();

    for (a, b) in first.cost.iter().zip(second.cost.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

/// The scorer is immutable configuration plus pure functions, so sharing
/// one across threads must be safe.
#[test]
fn scorer_usable_from_multiple_threads() {
    let partitions = random_partitions(99, 5, 30);
    let scorer = SimilarityScorer::new().workers(2);
    let baseline = scorer.aggregate(&partitions).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = scorer.clone();
            let partitions = partitions.clone();
            std::thread::spawn(move || scorer.aggregate(&partitions).unwrap())
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("worker thread panicked");
        for (a, b) in result.cost.iter().zip(baseline.cost.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
