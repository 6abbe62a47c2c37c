use serde_json::Value;
use std::io;

use super::{display_value, REPORT_SECTIONS};

/// Write output as CSV to stdout. Analyze reports flatten to
/// section,field,value rows; envelopes and plain objects to field,value.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) if map.contains_key("basics") => {
            let _ = wtr.write_record(["section", "field", "value"]);
            for section in REPORT_SECTIONS {
                if let Some(Value::Object(fields)) = map.get(section) {
                    for (key, val) in fields {
                        let _ = wtr.write_record([section, key.as_str(), &csv_value(val)]);
                    }
                }
            }
        }
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    let _ = wtr.write_record([key.as_str(), &csv_value(val)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&csv_value(item)]);
        }
    }
}

fn csv_value(value: &Value) -> String {
    match value {
        // Empty cell, not "n/a": CSV output feeds other tools.
        Value::Null => String::new(),
        _ => display_value(value),
    }
}
