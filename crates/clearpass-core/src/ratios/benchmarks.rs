use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Multiple, Rate};

// ---------------------------------------------------------------------------
// Static benchmark table
// ---------------------------------------------------------------------------

struct BenchmarkRow {
    naics: u32,
    industry_name: &'static str,
    current_ratio: Decimal,
    quick_ratio: Decimal,
    debt_to_equity: Decimal,
    profit_margin_pct: Decimal,
    roa_pct: Decimal,
}

/// Median underwriting ratios by NAICS industry. The first row doubles as
/// the default when a requested industry is not in the table.
const BENCHMARKS: [BenchmarkRow; 9] = [
    BenchmarkRow {
        naics: 311,
        industry_name: "Food Manufacturing",
        current_ratio: dec!(1.5),
        quick_ratio: dec!(1.2),
        debt_to_equity: dec!(1.2),
        profit_margin_pct: dec!(8.0),
        roa_pct: dec!(6.0),
    },
    BenchmarkRow {
        naics: 423,
        industry_name: "Wholesale Trade",
        current_ratio: dec!(1.6),
        quick_ratio: dec!(1.3),
        debt_to_equity: dec!(1.0),
        profit_margin_pct: dec!(6.0),
        roa_pct: dec!(5.0),
    },
    BenchmarkRow {
        naics: 424,
        industry_name: "Merchant Wholesalers",
        current_ratio: dec!(1.6),
        quick_ratio: dec!(1.3),
        debt_to_equity: dec!(1.0),
        profit_margin_pct: dec!(6.0),
        roa_pct: dec!(5.0),
    },
    BenchmarkRow {
        naics: 44,
        industry_name: "Retail",
        current_ratio: dec!(1.4),
        quick_ratio: dec!(1.1),
        debt_to_equity: dec!(1.6),
        profit_margin_pct: dec!(4.0),
        roa_pct: dec!(4.0),
    },
    BenchmarkRow {
        naics: 48,
        industry_name: "Transportation/Logistics",
        current_ratio: dec!(1.3),
        quick_ratio: dec!(1.0),
        debt_to_equity: dec!(2.0),
        profit_margin_pct: dec!(3.0),
        roa_pct: dec!(3.0),
    },
    BenchmarkRow {
        naics: 51,
        industry_name: "Information/Software",
        current_ratio: dec!(2.0),
        quick_ratio: dec!(1.8),
        debt_to_equity: dec!(0.6),
        profit_margin_pct: dec!(12.0),
        roa_pct: dec!(10.0),
    },
    BenchmarkRow {
        naics: 52,
        industry_name: "Financial Services",
        current_ratio: dec!(1.5),
        quick_ratio: dec!(1.3),
        debt_to_equity: dec!(1.5),
        profit_margin_pct: dec!(10.0),
        roa_pct: dec!(8.0),
    },
    BenchmarkRow {
        naics: 54,
        industry_name: "Professional Services",
        current_ratio: dec!(1.8),
        quick_ratio: dec!(1.6),
        debt_to_equity: dec!(0.8),
        profit_margin_pct: dec!(12.0),
        roa_pct: dec!(10.0),
    },
    BenchmarkRow {
        naics: 31,
        industry_name: "Manufacturing (General)",
        current_ratio: dec!(1.5),
        quick_ratio: dec!(1.2),
        debt_to_equity: dec!(1.2),
        profit_margin_pct: dec!(8.0),
        roa_pct: dec!(6.0),
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Median benchmark ratios for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub naics: u32,
    pub industry_name: String,
    pub current_ratio_median: Multiple,
    pub quick_ratio_median: Multiple,
    pub debt_to_equity_median: Multiple,
    pub profit_margin_median_pct: Rate,
    pub roa_median_pct: Rate,
}

/// Exact-match lookup by industry name. Unknown industries fall back to
/// the first table row; the lookup never fails.
pub fn benchmark_for(industry: &str) -> Benchmark {
    let row = BENCHMARKS
        .iter()
        .find(|r| r.industry_name == industry)
        .unwrap_or(&BENCHMARKS[0]);

    Benchmark {
        naics: row.naics,
        industry_name: row.industry_name.to_string(),
        current_ratio_median: row.current_ratio,
        quick_ratio_median: row.quick_ratio,
        debt_to_equity_median: row.debt_to_equity,
        profit_margin_median_pct: row.profit_margin_pct,
        roa_median_pct: row.roa_pct,
    }
}

/// Every industry name in the table, for selector surfaces.
pub fn industries() -> Vec<&'static str> {
    BENCHMARKS.iter().map(|r| r.industry_name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
