use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use clearpass_core::statement::layout;
use clearpass_core::{
    benchmark_for, compute_ratios, parse_statement, Basics, Cell, FieldVocabulary, RatioSet,
    RawTable,
};

use crate::input;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Arguments for the combined analyze report
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a statement table: CSV, or a JSON RawTable document
    #[arg(long)]
    pub input: Option<String>,

    /// Industry used for benchmark medians
    #[arg(long, default_value = "Wholesale Trade")]
    pub industry: String,

    /// Recompute ratios for every detected year column of a wide table
    #[arg(long)]
    pub all_years: bool,
}

/// Arguments for statement parsing
#[derive(Args)]
pub struct ParseArgs {
    /// Path to a statement table: CSV, or a JSON RawTable document
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for ratio computation from an already-normalized statement.
/// Every line-item flag is optional: an omitted flag is a missing field,
/// which is not the same as passing 0.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RatiosArgs {
    /// Path to a basics JSON document (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Cost of goods sold
    #[arg(long)]
    pub cogs: Option<Decimal>,

    /// Operating expenses
    #[arg(long, alias = "opex")]
    pub operating_expenses: Option<Decimal>,

    /// EBIT
    #[arg(long)]
    pub ebit: Option<Decimal>,

    /// EBITDA
    #[arg(long)]
    pub ebitda: Option<Decimal>,

    /// Net income
    #[arg(long)]
    pub net_income: Option<Decimal>,

    /// Cash and equivalents
    #[arg(long)]
    pub cash: Option<Decimal>,

    /// Accounts receivable
    #[arg(long, alias = "ar")]
    pub accounts_receivable: Option<Decimal>,

    /// Inventory
    #[arg(long)]
    pub inventory: Option<Decimal>,

    /// Accounts payable
    #[arg(long, alias = "ap")]
    pub accounts_payable: Option<Decimal>,

    /// Short-term debt
    #[arg(long)]
    pub short_term_debt: Option<Decimal>,

    /// Long-term debt
    #[arg(long)]
    pub long_term_debt: Option<Decimal>,

    /// Current assets
    #[arg(long)]
    pub current_assets: Option<Decimal>,

    /// Current liabilities
    #[arg(long)]
    pub current_liabilities: Option<Decimal>,

    /// Total liabilities
    #[arg(long)]
    pub total_liabilities: Option<Decimal>,

    /// Total equity
    #[arg(long)]
    pub equity: Option<Decimal>,

    /// Total assets
    #[arg(long)]
    pub total_assets: Option<Decimal>,

    /// Interest expense
    #[arg(long)]
    pub interest_expense: Option<Decimal>,

    /// Cash flow from operations
    #[arg(long)]
    pub cfo: Option<Decimal>,

    /// Interest paid (cash flow statement)
    #[arg(long)]
    pub interest_paid: Option<Decimal>,

    /// Principal repayment
    #[arg(long)]
    pub principal_repayment: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Runners
// ---------------------------------------------------------------------------

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let table = read_table(&args.input)?;
    let vocabulary = FieldVocabulary::default();

    let parsed = parse_statement(&table, &vocabulary)?;
    let ratios = compute_ratios(&parsed.result.basics);
    let benchmark = benchmark_for(&args.industry);

    let mut warnings = parsed.warnings;
    warnings.extend(ratios.warnings);

    let mut report = serde_json::json!({
        "industry": args.industry,
        "basics": parsed.result.basics,
        "ratios": ratios.result,
        "benchmark": benchmark,
        "warnings": warnings,
    });

    if args.all_years {
        report["years"] = serde_json::to_value(year_trend(&table, &vocabulary)?)?;
    }

    Ok(report)
}

pub fn run_parse(args: ParseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let table = read_table(&args.input)?;
    let parsed = parse_statement(&table, &FieldVocabulary::default())?;
    Ok(serde_json::to_value(parsed)?)
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let basics: Basics = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        Basics {
            revenue: args.revenue,
            cogs: args.cogs,
            operating_expenses: args.operating_expenses,
            ebit: args.ebit,
            ebitda: args.ebitda,
            net_income: args.net_income,
            cash: args.cash,
            accounts_receivable: args.accounts_receivable,
            inventory: args.inventory,
            accounts_payable: args.accounts_payable,
            short_term_debt: args.short_term_debt,
            long_term_debt: args.long_term_debt,
            current_assets: args.current_assets,
            current_liabilities: args.current_liabilities,
            total_liabilities: args.total_liabilities,
            equity: args.equity,
            total_assets: args.total_assets,
            interest_expense: args.interest_expense,
            cfo: args.cfo,
            interest_paid: args.interest_paid,
            principal_repayment: args.principal_repayment,
        }
    };

    let result = compute_ratios(&basics);
    Ok(serde_json::to_value(result)?)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_table(input: &Option<String>) -> Result<RawTable, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        if path.to_lowercase().ends_with(".csv") {
            input::file::read_csv_table(path)
        } else {
            input::file::read_json(path)
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err("--input file is required (or pipe a JSON table via stdin)".into())
    }
}

#[derive(Serialize)]
struct YearRatios {
    year: i32,
    header: String,
    #[serde(flatten)]
    ratios: RatioSet,
}

/// Re-project the wide table once per detected year column and compute a
/// ratio suite for each. Every year is an independent parse of its own
/// two-column view, so callers that want parallelism can split here.
fn year_trend(
    table: &RawTable,
    vocabulary: &FieldVocabulary,
) -> Result<Vec<YearRatios>, Box<dyn std::error::Error>> {
    let account_header = table.headers.first().cloned().unwrap_or_default();

    let mut out = Vec::new();
    for column in layout::year_columns(table) {
        let projected = RawTable {
            headers: vec![account_header.clone(), column.header.clone()],
            rows: table
                .rows
                .iter()
                .map(|row| {
                    vec![
                        row.first().cloned().unwrap_or(Cell::Empty),
                        row.get(column.index).cloned().unwrap_or(Cell::Empty),
                    ]
                })
                .collect(),
        };
        let parsed = parse_statement(&projected, vocabulary)?;
        let ratios = compute_ratios(&parsed.result.basics);
        out.push(YearRatios {
            year: column.year,
            header: column.header,
            ratios: ratios.result,
        });
    }
    Ok(out)
}
