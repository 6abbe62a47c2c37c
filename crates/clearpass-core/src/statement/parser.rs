use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

use crate::statement::basics::{synthesize_basics, Basics};
use crate::statement::layout::{resolve_layout, ProjectedRow};
use crate::statement::normalize::normalize_cell;
use crate::statement::vocabulary::{CanonicalField, FieldVocabulary};
use crate::types::{with_metadata, ComputationOutput, Money, RawTable};
use crate::ClearpassResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementOutput {
    /// Synthesized canonical line items for the selected period.
    pub basics: Basics,
    /// Raw per-field sums before synthesis, zero where nothing matched.
    pub accumulators: BTreeMap<CanonicalField, Money>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Normalize a raw statement table into canonical basics.
///
/// Resolves the table layout, cleans each value cell, classifies every
/// account label against the vocabulary, and synthesizes the Basics
/// record. Degraded-mode conditions (layout fallback) surface in the
/// envelope's warnings; the only error is a table with no columns.
pub fn parse_statement(
    table: &RawTable,
    vocabulary: &FieldVocabulary,
) -> ClearpassResult<ComputationOutput<StatementOutput>> {
    let start = Instant::now();

    let projection = resolve_layout(table)?;
    let accumulators = aggregate(&projection.rows, vocabulary);
    let basics = synthesize_basics(&accumulators);

    let output = StatementOutput {
        basics,
        accumulators,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "period_selection": "latest year column wins, rightmost on ties",
        "parenthesised_values": "negative",
        "unparsable_values": "excluded as missing, never summed as zero",
        "classification": "all matching fields accumulate, no precedence",
    });

    Ok(with_metadata(
        "Statement normalization (keyword classifier, single period)",
        &assumptions,
        projection.warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify each account row and sum matching values.
///
/// A label may feed several canonical fields at once; every matching
/// accumulator receives the value. Rows whose value did not survive
/// numeric cleaning contribute nothing. Addition is commutative, so row
/// order never affects the result.
pub fn aggregate(
    rows: &[ProjectedRow],
    vocabulary: &FieldVocabulary,
) -> BTreeMap<CanonicalField, Money> {
    let mut accumulators: BTreeMap<CanonicalField, Money> =
        vocabulary.fields().map(|f| (f, Money::ZERO)).collect();

    for row in rows {
        let Some(value) = normalize_cell(&row.value) else {
            continue;
        };
        let label = normalize_label(&row.account);
        for field in vocabulary.matching_fields(&label) {
            if let Some(total) = accumulators.get_mut(&field) {
                *total += value;
            }
        }
    }

    accumulators
}

/// Trim, collapse internal whitespace, lowercase.
fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
