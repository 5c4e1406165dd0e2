//! Output formatting for aggregation results.

use colored::Colorize;

use crate::result::CostResult;

/// Serialize a CostResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// CostResult).
pub fn to_json(result: &CostResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a CostResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// CostResult).
pub fn to_json_pretty(result: &CostResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Format a CostResult for human-readable terminal output.
pub fn format_result(result: &CostResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("partition-cost\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    let n = result.n_partitions();
    output.push_str(&format!("  Partitions: {}\n", n));
    output.push_str(&format!("  Mean cost:  {:.4}\n", result.mean_cost()));
    output.push('\n');

    let (best_idx, best_cost) = result.best();
    output.push_str(&format!(
        "  {}\n\n",
        format!(
            "\u{2713} Best partition: #{} (cost {:.4})",
            best_idx, best_cost
        )
        .green()
        .bold()
    ));

    for (idx, &cost) in result.cost.iter().enumerate() {
        let marker = if idx == best_idx { "*" } else { " " };
        output.push_str(&format!("    {} #{:<4} cost {:.4}\n", marker, idx, cost));
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output
}
