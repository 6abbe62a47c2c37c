use clearpass_core::statement::parser::parse_statement;
use clearpass_core::{benchmark_for, compute_ratios, Basics, Cell, FieldVocabulary, RawTable};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn underwriting_basics() -> Basics {
    Basics {
        revenue: Some(dec!(1_350_000)),
        cogs: Some(dec!(800_000)),
        operating_expenses: Some(dec!(335_000)),
        ebit: Some(dec!(215_000)),
        net_income: Some(dec!(150_000)),
        cash: Some(dec!(62_000)),
        accounts_receivable: Some(dec!(50_000)),
        inventory: Some(dec!(25_000)),
        current_assets: Some(dec!(170_000)),
        current_liabilities: Some(dec!(85_000)),
        total_liabilities: Some(dec!(240_000)),
        equity: Some(dec!(340_000)),
        total_assets: Some(dec!(580_000)),
        interest_expense: Some(dec!(24_000)),
        cfo: Some(dec!(110_000)),
        principal_repayment: Some(dec!(20_000)),
        ..Basics::default()
    }
}

// ===========================================================================
// Ratio engine
// ===========================================================================

#[test]
fn test_full_ratio_suite() {
    let ratios = compute_ratios(&underwriting_basics()).result;

    assert_eq!(ratios.current_ratio, Some(dec!(2.00)));
    assert_eq!(ratios.quick_ratio, Some(dec!(1.32)));
    assert_eq!(ratios.debt_to_equity, Some(dec!(0.71)));
    assert_eq!(ratios.profit_margin_pct, Some(dec!(11.11)));
    assert_eq!(ratios.return_on_assets_pct, Some(dec!(25.86)));
    assert_eq!(ratios.interest_coverage_ebit, Some(dec!(8.96)));
    assert_eq!(ratios.interest_coverage_ebitda, None);
    assert_eq!(ratios.gross_margin_pct, Some(dec!(40.74)));
    assert_eq!(ratios.operating_margin_pct, Some(dec!(15.93)));
    assert_eq!(ratios.dscr, Some(dec!(2.50)));
}

#[test]
fn test_ratios_are_idempotent() {
    let basics = underwriting_basics();
    let first = compute_ratios(&basics);
    let second = compute_ratios(&basics);
    assert_eq!(first.result, second.result);
}

#[test]
fn test_missing_equity_yields_indeterminate_leverage() {
    let mut basics = underwriting_basics();
    basics.equity = None;
    basics.total_liabilities = Some(dec!(240_000));
    let ratios = compute_ratios(&basics).result;
    assert_eq!(ratios.debt_to_equity, None);
}

#[test]
fn test_dscr_defined_when_only_debt_service_known() {
    let basics = Basics {
        interest_paid: Some(dec!(24_000)),
        principal_repayment: Some(dec!(20_000)),
        ..Basics::default()
    };
    let ratios = compute_ratios(&basics).result;
    // Missing CFO counts as zero against real debt service: a defined,
    // poor DSCR rather than an indeterminate one.
    assert_eq!(ratios.dscr, Some(dec!(0.00)));
}

#[test]
fn test_no_ratio_is_ever_infinite() {
    let basics = Basics {
        revenue: Some(dec!(0)),
        net_income: Some(dec!(150_000)),
        total_liabilities: Some(dec!(240_000)),
        equity: Some(dec!(0)),
        current_assets: Some(dec!(170_000)),
        current_liabilities: Some(dec!(0)),
        ..Basics::default()
    };
    let ratios = compute_ratios(&basics).result;
    assert_eq!(ratios.current_ratio, None);
    assert_eq!(ratios.debt_to_equity, None);
    assert_eq!(ratios.profit_margin_pct, None);
    assert_eq!(ratios.gross_margin_pct, None);
}

// ===========================================================================
// Parse-to-ratios pipeline
// ===========================================================================

#[test]
fn test_long_statement_through_to_ratios() {
    let table = RawTable {
        headers: vec!["Account".to_string(), "Value".to_string()],
        rows: [
            ("Revenue", "1,350,000"),
            ("COGS", "800,000"),
            ("Operating Expenses", "335,000"),
            ("Current Assets", "170,000"),
            ("Current Liabilities", "85,000"),
            ("Net Income", "150,000"),
        ]
        .iter()
        .map(|(a, v)| vec![Cell::Text(a.to_string()), Cell::Text(v.to_string())])
        .collect(),
    };

    let vocab = FieldVocabulary::default();
    let parsed = parse_statement(&table, &vocab).unwrap();
    let ratios = compute_ratios(&parsed.result.basics).result;

    assert_eq!(parsed.result.basics.revenue, Some(dec!(1_350_000)));
    assert_eq!(ratios.profit_margin_pct, Some(dec!(11.11)));
    assert_eq!(ratios.current_ratio, Some(dec!(2.00)));
}

// ===========================================================================
// Benchmark lookup
// ===========================================================================

#[test]
fn test_benchmark_known_industry() {
    let bench = benchmark_for("Wholesale Trade");
    assert_eq!(bench.naics, 423);
    assert_eq!(bench.current_ratio_median, dec!(1.6));
    assert_eq!(bench.quick_ratio_median, dec!(1.3));
    assert_eq!(bench.debt_to_equity_median, dec!(1.0));
    assert_eq!(bench.profit_margin_median_pct, dec!(6.0));
    assert_eq!(bench.roa_median_pct, dec!(5.0));
}

#[test]
fn test_benchmark_unknown_industry_uses_first_row() {
    let fallback = benchmark_for("Asteroid Mining");
    let first = benchmark_for("Food Manufacturing");
    assert_eq!(fallback, first);
}
