use clearpass_core::statement::parser::parse_statement;
use clearpass_core::{Cell, FieldVocabulary, RawTable};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn long_table(rows: &[(&str, &str)]) -> RawTable {
    RawTable {
        headers: vec!["Account".to_string(), "Value".to_string()],
        rows: rows
            .iter()
            .map(|(account, value)| {
                vec![
                    Cell::Text(account.to_string()),
                    Cell::Text(value.to_string()),
                ]
            })
            .collect(),
    }
}

fn sample_long_statement() -> RawTable {
    long_table(&[
        ("Revenue", "1,350,000"),
        ("COGS", "800,000"),
        ("Operating Expenses", "335,000"),
        ("Current Assets", "170,000"),
        ("Current Liabilities", "85,000"),
        ("Net Income", "150,000"),
    ])
}

// ===========================================================================
// Long-format parsing
// ===========================================================================

#[test]
fn test_parse_long_statement_basics() {
    let vocab = FieldVocabulary::default();
    let parsed = parse_statement(&sample_long_statement(), &vocab).unwrap();
    let basics = &parsed.result.basics;

    assert_eq!(basics.revenue, Some(dec!(1_350_000)));
    assert_eq!(basics.cogs, Some(dec!(800_000)));
    assert_eq!(basics.operating_expenses, Some(dec!(335_000)));
    assert_eq!(basics.current_assets, Some(dec!(170_000)));
    assert_eq!(basics.current_liabilities, Some(dec!(85_000)));
    assert_eq!(basics.net_income, Some(dec!(150_000)));
    // No explicit EBIT line: derived as 1.35M - 800k - 335k
    assert_eq!(basics.ebit, Some(dec!(215_000)));
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_unmatched_fields_are_missing_not_zero() {
    let vocab = FieldVocabulary::default();
    let parsed = parse_statement(&sample_long_statement(), &vocab).unwrap();
    let basics = &parsed.result.basics;

    assert_eq!(basics.equity, None);
    assert_eq!(basics.total_assets, None);
    assert_eq!(basics.cfo, None);
    assert_eq!(basics.ebitda, None);
}

#[test]
fn test_row_order_invariance() {
    let vocab = FieldVocabulary::default();
    let forward = parse_statement(&sample_long_statement(), &vocab).unwrap();

    let mut reversed_table = sample_long_statement();
    reversed_table.rows.reverse();
    let reversed = parse_statement(&reversed_table, &vocab).unwrap();

    assert_eq!(forward.result, reversed.result);
}

#[test]
fn test_parenthesised_loss_parses_negative() {
    let vocab = FieldVocabulary::default();
    let table = long_table(&[("Net Income", "(150,000)")]);
    let parsed = parse_statement(&table, &vocab).unwrap();
    assert_eq!(parsed.result.basics.net_income, Some(dec!(-150_000)));
}

#[test]
fn test_split_line_items_sum_into_one_field() {
    let vocab = FieldVocabulary::default();
    let table = long_table(&[
        ("Trade receivables", "40,000"),
        ("Receivables due after one year", "5,000"),
    ]);
    let parsed = parse_statement(&table, &vocab).unwrap();
    assert_eq!(parsed.result.basics.accounts_receivable, Some(dec!(45_000)));
}

#[test]
fn test_unparsable_values_are_skipped() {
    let vocab = FieldVocabulary::default();
    let table = long_table(&[("Revenue", "see note 4"), ("Revenue", "1,000")]);
    let parsed = parse_statement(&table, &vocab).unwrap();
    assert_eq!(parsed.result.basics.revenue, Some(dec!(1000)));
}

// ===========================================================================
// Wide-format parsing
// ===========================================================================

fn wide_statement(headers: &[&str], revenue: &[i64]) -> RawTable {
    let mut row = vec![Cell::Text("Revenue".to_string())];
    row.extend(revenue.iter().map(|v| Cell::Number((*v).into())));
    RawTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: vec![row],
    }
}

#[test]
fn test_wide_table_selects_latest_year() {
    let vocab = FieldVocabulary::default();
    let table = wide_statement(
        &["Line Item", "2022", "2023", "2024"],
        &[1_000_000, 1_200_000, 1_350_000],
    );
    let parsed = parse_statement(&table, &vocab).unwrap();
    assert_eq!(parsed.result.basics.revenue, Some(dec!(1_350_000)));
}

#[test]
fn test_wide_table_latest_year_in_any_column_order() {
    let vocab = FieldVocabulary::default();
    let table = wide_statement(
        &["Line Item", "2024", "2022", "2023"],
        &[1_350_000, 1_000_000, 1_200_000],
    );
    let parsed = parse_statement(&table, &vocab).unwrap();
    assert_eq!(parsed.result.basics.revenue, Some(dec!(1_350_000)));
}

#[test]
fn test_wide_table_without_years_degrades_with_warning() {
    let vocab = FieldVocabulary::default();
    let table = wide_statement(
        &["Line Item", "Opening", "Movement", "Closing"],
        &[500, 100, 600],
    );
    let parsed = parse_statement(&table, &vocab).unwrap();
    // First two columns used verbatim.
    assert_eq!(parsed.result.basics.revenue, Some(dec!(500)));
    assert_eq!(parsed.warnings.len(), 1);
}

#[test]
fn test_empty_table_has_no_columns() {
    let vocab = FieldVocabulary::default();
    let table = RawTable {
        headers: vec![],
        rows: vec![],
    };
    assert!(parse_statement(&table, &vocab).is_err());
}

// ===========================================================================
// Accumulator surface
// ===========================================================================

#[test]
fn test_accumulators_returned_alongside_basics() {
    use clearpass_core::CanonicalField;

    let vocab = FieldVocabulary::default();
    let parsed = parse_statement(&sample_long_statement(), &vocab).unwrap();
    let accumulators = &parsed.result.accumulators;

    assert_eq!(accumulators.len(), CanonicalField::ALL.len());
    assert_eq!(accumulators[&CanonicalField::Revenue], dec!(1_350_000));
    // Unmatched accumulators stay at zero; the missing/zero distinction
    // is drawn at synthesis time, not here.
    assert_eq!(accumulators[&CanonicalField::Equity], dec!(0));
}
