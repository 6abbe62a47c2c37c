use serde_json::Value;

use super::display_value;

/// Print just the key answer value from the output.
///
/// Heuristic: prefer the ratio fields an underwriter scans first, then
/// fall back to the first field of whatever record is present.
pub fn print_minimal(value: &Value) {
    // Analyze reports carry a "ratios" section; envelopes carry "result".
    let record = value
        .as_object()
        .and_then(|m| m.get("ratios").or_else(|| m.get("result")))
        .unwrap_or(value);

    let priority_keys = [
        "dscr",
        "current_ratio",
        "debt_to_equity",
        "profit_margin_pct",
        "interest_coverage_ebit",
    ];

    if let Value::Object(map) = record {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}: {}", key, display_value(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(val));
            return;
        }
    }

    println!("{}", display_value(record));
}
