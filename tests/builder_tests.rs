//! Builder API and input validation surface.

use partition_cost::{aggregate_cost, fmeasure, Config, InputError, SimilarityScorer};

#[test]
fn builder_api() {
    let scorer = SimilarityScorer::new().workers(4);
    assert_eq!(scorer.config().workers, 4);

    let scorer = SimilarityScorer::with_config(Config { workers: 2 });
    assert_eq!(scorer.config().workers, 2);

    assert_eq!(SimilarityScorer::default().config().workers, 1);
}

#[test]
fn zero_workers_is_invalid_input() {
    let scorer = SimilarityScorer::new().workers(0);
    assert_eq!(
        scorer.fmeasure(&[1.0, 2.0], &[1.0, 2.0]),
        Err(InputError::ZeroWorkers)
    );
    assert!(matches!(
        scorer.aggregate(&[vec![1.0, 2.0]]),
        Err(InputError::ZeroWorkers)
    ));
}

#[test]
fn length_mismatch_reported_with_both_lengths() {
    match fmeasure(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
        Err(InputError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn empty_inputs_rejected() {
    assert_eq!(fmeasure(&[], &[]), Err(InputError::EmptyPartition));

    let empty: Vec<Vec<f64>> = vec![];
    assert!(matches!(
        aggregate_cost(&empty),
        Err(InputError::EmptyCollection)
    ));
    assert!(matches!(
        aggregate_cost(&[Vec::<f64>::new(), Vec::<f64>::new()]),
        Err(InputError::EmptyPartition)
    ));
}

#[test]
fn ragged_collection_names_expected_length() {
    let partitions = vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0]];
    match aggregate_cost(&partitions) {
        Err(InputError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 2);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn errors_implement_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(InputError::EmptyCollection);
    assert!(!err.to_string().is_empty());
}

/// N = 1 is a degenerate but accepted collection: the literal cost formula
/// yields 1 - (1 - 1)/1 = 1 for the lone partition.
#[test]
fn singleton_collection_is_accepted() {
    let result = aggregate_cost(&[vec![1.0, 1.0, 2.0]]).unwrap();
    assert_eq!(result.n_partitions(), 1);
    assert_eq!(result.similarity[(0, 0)], 1.0);
    assert_eq!(result.cost, vec![1.0]);
}

#[test]
fn accepts_any_as_ref_partition_container() {
    let owned: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
    let borrowed: Vec<&[f64]> = owned.iter().map(Vec::as_slice).collect();

    let a = aggregate_cost(&owned).unwrap();
    let b = aggregate_cost(&borrowed).unwrap();
    assert_eq!(a.cost, b.cost);
}
