use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::statement::basics::Basics;
use crate::types::{with_metadata, ComputationOutput, Money, Multiple, Rate};

const PCT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// Underwriting ratios for a single period. `None` is the indeterminate
/// sentinel: a required operand was missing or a denominator was zero.
/// Numeric values are rounded to 2 decimal places; infinities and NaN
/// cannot occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub current_ratio: Option<Multiple>,
    pub quick_ratio: Option<Multiple>,
    pub debt_to_equity: Option<Multiple>,
    pub profit_margin_pct: Option<Rate>,
    pub return_on_assets_pct: Option<Rate>,
    pub interest_coverage_ebit: Option<Multiple>,
    pub interest_coverage_ebitda: Option<Multiple>,
    pub gross_margin_pct: Option<Rate>,
    pub operating_margin_pct: Option<Rate>,
    pub dscr: Option<Multiple>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the full ratio suite from a Basics record.
///
/// Pure and infallible: every "cannot compute" condition becomes the
/// indeterminate sentinel rather than an error, so callers render "n/a"
/// without special-casing failures.
pub fn compute_ratios(basics: &Basics) -> ComputationOutput<RatioSet> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if basics.revenue.is_none() {
        warnings.push("Revenue is missing; margin ratios are indeterminate.".into());
    }

    // Quick assets prefer the cash + receivables build-up; only when both
    // are missing does the subtraction proxy apply.
    let quick_assets = if basics.cash.is_some() || basics.accounts_receivable.is_some() {
        basics.cash.unwrap_or(Decimal::ZERO)
            + basics.accounts_receivable.unwrap_or(Decimal::ZERO)
    } else {
        basics.current_assets.unwrap_or(Decimal::ZERO)
            - basics.inventory.unwrap_or(Decimal::ZERO)
    };

    // Missing COGS counts as zero against a known Revenue.
    let gross_profit = basics
        .revenue
        .map(|revenue| revenue - basics.cogs.unwrap_or(Decimal::ZERO));

    // DSCR is asymmetric on purpose: a borrower with real debt service
    // and no reported operating cash flow gets a defined, poor 0.00, not
    // an indeterminate. Only a zero debt-service denominator is
    // indeterminate.
    let debt_service = basics
        .interest_paid
        .or(basics.interest_expense)
        .unwrap_or(Decimal::ZERO)
        + basics.principal_repayment.unwrap_or(Decimal::ZERO);
    let dscr = if debt_service.is_zero() {
        None
    } else {
        if basics.cfo.is_none() {
            warnings.push("CFO is missing; DSCR numerator defaults to zero.".into());
        }
        Some(basics.cfo.unwrap_or(Decimal::ZERO) / debt_service)
    };

    let ratios = RatioSet {
        current_ratio: round2(safe_divide(basics.current_assets, basics.current_liabilities)),
        quick_ratio: round2(safe_divide(Some(quick_assets), basics.current_liabilities)),
        debt_to_equity: round2(safe_divide(basics.total_liabilities, basics.equity)),
        profit_margin_pct: round2(
            safe_divide(basics.net_income, basics.revenue).map(|r| r * PCT),
        ),
        return_on_assets_pct: round2(
            safe_divide(basics.net_income, basics.total_assets).map(|r| r * PCT),
        ),
        interest_coverage_ebit: round2(safe_divide(basics.ebit, basics.interest_expense)),
        interest_coverage_ebitda: round2(safe_divide(basics.ebitda, basics.interest_expense)),
        gross_margin_pct: round2(safe_divide(gross_profit, basics.revenue).map(|r| r * PCT)),
        operating_margin_pct: round2(safe_divide(basics.ebit, basics.revenue).map(|r| r * PCT)),
        dscr: round2(dscr),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rounding": "2 decimal places, midpoint to even",
        "quick_assets": "cash + receivables when either present, else current assets - inventory",
        "dscr_missing_cfo": "treated as zero against a nonzero debt service",
        "indeterminate": "missing operand or zero denominator, never NaN or infinity",
    });

    with_metadata(
        "Underwriting ratios (single-period rollup)",
        &assumptions,
        warnings,
        elapsed,
        ratios,
    )
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `None` when the numerator is missing or the denominator is missing or
/// zero; otherwise the exact quotient.
fn safe_divide(numerator: Option<Money>, denominator: Option<Money>) -> Option<Decimal> {
    let denominator = denominator.filter(|d| !d.is_zero())?;
    let numerator = numerator?;
    Some(numerator / denominator)
}

fn round2(value: Option<Decimal>) -> Option<Decimal> {
    value.map(|v| v.round_dp(2))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
