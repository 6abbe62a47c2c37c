use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::statement::vocabulary::CanonicalField;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Basics record
// ---------------------------------------------------------------------------

/// Canonical line items for a single reporting period.
///
/// `None` means the statement produced no usable figure for the field and
/// no fallback formula applied. Missing is never coerced to zero: ratio
/// math downstream must be able to tell an unknown balance from a zero
/// one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    pub revenue: Option<Money>,
    pub cogs: Option<Money>,
    pub operating_expenses: Option<Money>,
    pub ebit: Option<Money>,
    pub ebitda: Option<Money>,
    pub net_income: Option<Money>,
    pub cash: Option<Money>,
    pub accounts_receivable: Option<Money>,
    pub inventory: Option<Money>,
    pub accounts_payable: Option<Money>,
    pub short_term_debt: Option<Money>,
    pub long_term_debt: Option<Money>,
    pub current_assets: Option<Money>,
    pub current_liabilities: Option<Money>,
    pub total_liabilities: Option<Money>,
    pub equity: Option<Money>,
    pub total_assets: Option<Money>,
    pub interest_expense: Option<Money>,
    pub cfo: Option<Money>,
    pub interest_paid: Option<Money>,
    pub principal_repayment: Option<Money>,
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Derive the Basics record from classified accumulators.
///
/// Direct fields report the accumulator when it is nonzero, else missing
/// (a zero accumulator cannot be told apart from "no rows matched", so
/// both resolve to missing). Two fields carry fallback formulas:
/// EBIT = Revenue − COGS − OpEx when Revenue and COGS both resolved, and
/// Current Assets = Cash + AR + Inventory when no explicit subtotal line
/// exists, with a zero fallback sum still reported as missing.
pub fn synthesize_basics(accumulators: &BTreeMap<CanonicalField, Money>) -> Basics {
    use CanonicalField::*;

    let raw = |field: CanonicalField| -> Money {
        accumulators.get(&field).copied().unwrap_or(Decimal::ZERO)
    };
    let direct = |field: CanonicalField| -> Option<Money> {
        accumulators.get(&field).copied().filter(|v| !v.is_zero())
    };

    let ebit = direct(Ebit).or_else(|| match (direct(Revenue), direct(Cogs)) {
        (Some(revenue), Some(cogs)) => Some(revenue - cogs - raw(OperatingExpenses)),
        _ => None,
    });

    let current_assets = direct(CurrentAssets)
        .or_else(|| {
            let components = raw(Cash) + raw(AccountsReceivable) + raw(Inventory);
            Some(components)
        })
        .filter(|v| !v.is_zero());

    Basics {
        revenue: direct(Revenue),
        cogs: direct(Cogs),
        operating_expenses: direct(OperatingExpenses),
        ebit,
        ebitda: direct(Ebitda),
        net_income: direct(NetIncome),
        cash: direct(Cash),
        accounts_receivable: direct(AccountsReceivable),
        inventory: direct(Inventory),
        accounts_payable: direct(AccountsPayable),
        short_term_debt: direct(ShortTermDebt),
        long_term_debt: direct(LongTermDebt),
        current_assets,
        current_liabilities: direct(CurrentLiabilities),
        total_liabilities: direct(TotalLiabilities),
        equity: direct(Equity),
        total_assets: direct(TotalAssets),
        interest_expense: direct(InterestExpense),
        cfo: direct(Cfo),
        interest_paid: direct(InterestPaid),
        principal_repayment: direct(PrincipalRepayment),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn accumulators(pairs: &[(CanonicalField, Money)]) -> BTreeMap<CanonicalField, Money> {
        let mut map: BTreeMap<CanonicalField, Money> = CanonicalField::ALL
            .iter()
            .map(|f| (*f, Decimal::ZERO))
            .collect();
        for (field, value) in pairs {
            map.insert(*field, *value);
        }
        map
    }

    #[test]
    fn test_direct_field_nonzero_resolves() {
        let basics = synthesize_basics(&accumulators(&[(CanonicalField::Revenue, dec!(500))]));
        assert_eq!(basics.revenue, Some(dec!(500)));
    }

    #[test]
    fn test_unmatched_field_is_missing_not_zero() {
        let basics = synthesize_basics(&accumulators(&[]));
        assert_eq!(basics.equity, None);
        assert_eq!(basics.total_assets, None);
    }

    #[test]
    fn test_ebit_derived_from_revenue_cogs_opex() {
        let basics = synthesize_basics(&accumulators(&[
            (CanonicalField::Revenue, dec!(1000)),
            (CanonicalField::Cogs, dec!(600)),
            (CanonicalField::OperatingExpenses, dec!(150)),
        ]));
        assert_eq!(basics.ebit, Some(dec!(250)));
    }

    #[test]
    fn test_ebit_derivation_treats_missing_opex_as_zero() {
        let basics = synthesize_basics(&accumulators(&[
            (CanonicalField::Revenue, dec!(1000)),
            (CanonicalField::Cogs, dec!(600)),
        ]));
        assert_eq!(basics.ebit, Some(dec!(400)));
    }

    #[test]
    fn test_ebit_missing_without_revenue_and_cogs() {
        let basics = synthesize_basics(&accumulators(&[
            (CanonicalField::Revenue, dec!(1000)),
            (CanonicalField::OperatingExpenses, dec!(150)),
        ]));
        assert_eq!(basics.ebit, None);
    }

    #[test]
    fn test_explicit_ebit_wins_over_derivation() {
        let basics = synthesize_basics(&accumulators(&[
            (CanonicalField::Ebit, dec!(215)),
            (CanonicalField::Revenue, dec!(1000)),
            (CanonicalField::Cogs, dec!(600)),
        ]));
        assert_eq!(basics.ebit, Some(dec!(215)));
    }

    #[test]
    fn test_current_assets_fallback_sums_components() {
        let basics = synthesize_basics(&accumulators(&[
            (CanonicalField::Cash, dec!(50)),
            (CanonicalField::AccountsReceivable, dec!(40)),
            (CanonicalField::Inventory, dec!(30)),
        ]));
        assert_eq!(basics.current_assets, Some(dec!(120)));
    }

    #[test]
    fn test_current_assets_zero_fallback_is_missing() {
        // No subtotal and no components: a zero sum cannot be told apart
        // from total absence of data.
        let basics = synthesize_basics(&accumulators(&[(
            CanonicalField::Revenue,
            dec!(1000),
        )]));
        assert_eq!(basics.current_assets, None);
    }

    #[test]
    fn test_negative_accumulator_still_resolves() {
        let basics = synthesize_basics(&accumulators(&[(
            CanonicalField::NetIncome,
            dec!(-120),
        )]));
        assert_eq!(basics.net_income, Some(dec!(-120)));
    }
}
