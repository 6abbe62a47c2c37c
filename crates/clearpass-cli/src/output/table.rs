use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{display_value, REPORT_SECTIONS};

/// Render an analyze report or a computation envelope with the tabled
/// crate. Missing basics and indeterminate ratios print as "n/a".
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("basics") => {
            // Combined analyze report: one table per section.
            for section in REPORT_SECTIONS {
                if let Some(Value::Object(fields)) = map.get(section) {
                    println!("{}:", section);
                    print_field_table(fields);
                    println!();
                }
            }
            if let Some(Value::Array(years)) = map.get("years") {
                println!("by year:");
                print_array_table(years);
                println!();
            }
            print_warnings(map);
        }
        Value::Object(map) if map.contains_key("result") => {
            // Computation envelope from parse/ratios.
            match map.get("result") {
                Some(Value::Object(fields)) => print_envelope_result(fields),
                Some(other) => println!("{}", display_value(other)),
                None => {}
            }
            print_warnings(map);
            if let Some(Value::String(methodology)) = map.get("methodology") {
                println!("\nMethodology: {}", methodology);
            }
        }
        Value::Object(map) => print_field_table(map),
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_envelope_result(fields: &serde_json::Map<String, Value>) {
    // parse emits nested basics/accumulators; flatten one level so each
    // record gets its own table.
    let nested: Vec<(&String, &serde_json::Map<String, Value>)> = fields
        .iter()
        .filter_map(|(key, value)| value.as_object().map(|obj| (key, obj)))
        .collect();

    if nested.len() == fields.len() && !nested.is_empty() {
        for (key, obj) in nested {
            println!("{}:", key);
            print_field_table(obj);
            println!();
        }
    } else {
        print_field_table(fields);
    }
}

fn print_field_table(fields: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, value) in fields {
        builder.push_record([key.as_str(), &display_value(value)]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(display_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", display_value(item));
        }
    }
}

fn print_warnings(map: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("Warnings:");
            for warning in warnings {
                if let Value::String(s) = warning {
                    println!("  - {}", s);
                }
            }
        }
    }
}
