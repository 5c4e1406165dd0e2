//! Serialization and terminal output of results.

use partition_cost::{aggregate_cost, output, CostResult};

fn sample_result() -> CostResult {
    let partitions = vec![
        vec![1.0, 1.0, 2.0, 3.0, 2.0, 3.0],
        vec![1.0, 1.0, 1.0, 2.0, 3.0, 3.0],
        vec![2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
    ];
    aggregate_cost(&partitions).unwrap()
}

#[test]
fn result_serializes_to_json() {
    let result = sample_result();
    let json = output::to_json(&result).expect("should serialize");
    assert!(json.contains("similarity"));
    assert!(json.contains("cost"));
}

#[test]
fn result_round_trips_through_json() {
    let result = sample_result();
    let json = output::to_json_pretty(&result).expect("should serialize");
    let back: CostResult = serde_json::from_str(&json).expect("should deserialize");

    assert_eq!(back.cost, result.cost);
    assert_eq!(back.similarity, result.similarity);
}

#[test]
fn terminal_summary_reports_collection() {
    let result = sample_result();
    let text = output::format_result(&result);

    assert!(text.contains("partition-cost"));
    assert!(text.contains("Partitions: 3"));
    assert!(text.contains("Best partition"));
    // one line per partition
    for idx in 0..3 {
        assert!(text.contains(&format!("#{}", idx)));
    }
}
