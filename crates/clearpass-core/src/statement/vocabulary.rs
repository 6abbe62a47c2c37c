use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Canonical fields
// ---------------------------------------------------------------------------

/// Canonical financial statement line items the classifier recognizes,
/// independent of how a source table labels them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    CurrentAssets,
    Cash,
    AccountsReceivable,
    Inventory,
    CurrentLiabilities,
    TotalLiabilities,
    Equity,
    TotalAssets,
    Revenue,
    Cogs,
    OperatingExpenses,
    Ebit,
    Ebitda,
    InterestExpense,
    NetIncome,
    ShortTermDebt,
    LongTermDebt,
    AccountsPayable,
    Cfo,
    InterestPaid,
    PrincipalRepayment,
}

impl CanonicalField {
    /// Every recognized field, in vocabulary order.
    pub const ALL: [CanonicalField; 21] = [
        Self::CurrentAssets,
        Self::Cash,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::CurrentLiabilities,
        Self::TotalLiabilities,
        Self::Equity,
        Self::TotalAssets,
        Self::Revenue,
        Self::Cogs,
        Self::OperatingExpenses,
        Self::Ebit,
        Self::Ebitda,
        Self::InterestExpense,
        Self::NetIncome,
        Self::ShortTermDebt,
        Self::LongTermDebt,
        Self::AccountsPayable,
        Self::Cfo,
        Self::InterestPaid,
        Self::PrincipalRepayment,
    ];
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CurrentAssets => "current_assets",
            Self::Cash => "cash",
            Self::AccountsReceivable => "accounts_receivable",
            Self::Inventory => "inventory",
            Self::CurrentLiabilities => "current_liabilities",
            Self::TotalLiabilities => "total_liabilities",
            Self::Equity => "equity",
            Self::TotalAssets => "total_assets",
            Self::Revenue => "revenue",
            Self::Cogs => "cogs",
            Self::OperatingExpenses => "operating_expenses",
            Self::Ebit => "ebit",
            Self::Ebitda => "ebitda",
            Self::InterestExpense => "interest_expense",
            Self::NetIncome => "net_income",
            Self::ShortTermDebt => "short_term_debt",
            Self::LongTermDebt => "long_term_debt",
            Self::AccountsPayable => "accounts_payable",
            Self::Cfo => "cfo",
            Self::InterestPaid => "interest_paid",
            Self::PrincipalRepayment => "principal_repayment",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Recognition patterns
// ---------------------------------------------------------------------------

/// One recognition pattern: a regex tested anywhere in the normalized
/// (lowercased, whitespace-collapsed) label, with an optional veto regex
/// for labels the pattern must not claim.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    matcher: Regex,
    exclude: Option<Regex>,
}

impl FieldPattern {
    fn new(pattern: &str) -> Self {
        Self {
            matcher: Regex::new(pattern).unwrap(),
            exclude: None,
        }
    }

    fn with_exclude(pattern: &str, exclude: &str) -> Self {
        Self {
            matcher: Regex::new(pattern).unwrap(),
            exclude: Some(Regex::new(exclude).unwrap()),
        }
    }

    pub fn is_match(&self, label: &str) -> bool {
        self.matcher.is_match(label)
            && !self.exclude.as_ref().is_some_and(|e| e.is_match(label))
    }
}

/// Fixed mapping from canonical field to its recognition patterns.
/// Compiled once at construction and passed by reference into the parser;
/// a label may satisfy several fields at once, so lookups are multi-map
/// tests rather than first-match dispatch.
#[derive(Debug, Clone)]
pub struct FieldVocabulary {
    entries: Vec<(CanonicalField, Vec<FieldPattern>)>,
}

impl FieldVocabulary {
    pub fn entries(&self) -> &[(CanonicalField, Vec<FieldPattern>)] {
        &self.entries
    }

    /// All vocabulary keys, in fixed iteration order.
    pub fn fields(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    /// Every canonical field whose pattern set matches the label.
    pub fn matching_fields<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = CanonicalField> + 'a {
        self.entries
            .iter()
            .filter(move |(_, patterns)| patterns.iter().any(|p| p.is_match(label)))
            .map(|(field, _)| *field)
    }
}

impl Default for FieldVocabulary {
    fn default() -> Self {
        use CanonicalField::*;
        let p = FieldPattern::new;
        Self {
            entries: vec![
                (
                    CurrentAssets,
                    vec![p(r"\bcurrent assets\b"), p(r"\btotal current assets\b")],
                ),
                (
                    Cash,
                    vec![
                        p(r"\bcash\b"),
                        p(r"\bcash and cash equivalents\b"),
                        p(r"\bcash equivalents\b"),
                    ],
                ),
                (
                    AccountsReceivable,
                    vec![
                        p(r"\baccounts receivable\b"),
                        p(r"\btrade receivables\b"),
                        p(r"\breceivables\b"),
                    ],
                ),
                (
                    Inventory,
                    vec![
                        p(r"\binventor(y|ies)\b"),
                        p(r"\bmerchandise inventory\b"),
                        p(r"\bstock[- ]in[- ]trade\b"),
                    ],
                ),
                (
                    CurrentLiabilities,
                    vec![
                        p(r"\bcurrent liabilities\b"),
                        p(r"\btotal current liabilities\b"),
                    ],
                ),
                (
                    TotalLiabilities,
                    vec![
                        p(r"\btotal liabilities\b"),
                        // "liabilities" alone must not claim combined
                        // "liabilities and equity" subtotal lines.
                        FieldPattern::with_exclude(r"\bliabilities\b", r"and equity"),
                    ],
                ),
                (
                    Equity,
                    vec![
                        p(r"\b(total )?(shareholders'|stockholders'|owners'?) equity\b"),
                        p(r"\btotal equity\b"),
                        p(r"\bequity attributable\b"),
                    ],
                ),
                (TotalAssets, vec![p(r"\btotal assets\b")]),
                (
                    Revenue,
                    vec![
                        p(r"\b(revenue|sales|net sales|total revenue)\b"),
                        p(r"\bturnover\b"),
                    ],
                ),
                (
                    Cogs,
                    vec![p(r"\b(cost of goods sold|cogs|cost of revenue)\b")],
                ),
                (
                    OperatingExpenses,
                    vec![
                        p(r"\boperating expenses\b"),
                        p(r"\bselling, general and administrative\b"),
                        p(r"\bsga\b"),
                        p(r"\bresearch and development\b"),
                    ],
                ),
                (
                    Ebit,
                    vec![
                        p(r"\boperating income\b"),
                        p(r"\bebit\b"),
                        p(r"\bearnings before interest and taxes\b"),
                    ],
                ),
                (
                    Ebitda,
                    vec![
                        p(r"\bebitda\b"),
                        p(r"\bearnings before interest, taxes, depreciation and amortization\b"),
                    ],
                ),
                (
                    InterestExpense,
                    vec![p(r"\binterest expense\b"), p(r"\bfinance costs?\b")],
                ),
                (
                    NetIncome,
                    vec![
                        p(r"\bnet income\b"),
                        p(r"\bprofit attributable\b"),
                        p(r"\bnet profit\b"),
                        p(r"\bprofit for the period\b"),
                    ],
                ),
                (
                    ShortTermDebt,
                    vec![
                        p(r"\bshort[- ]?term debt\b"),
                        p(r"\bcurrent portion of (long[- ]?term )?debt\b"),
                    ],
                ),
                (
                    LongTermDebt,
                    vec![
                        p(r"\blong[- ]?term debt\b"),
                        p(r"\bnon[- ]?current borrowings\b"),
                    ],
                ),
                (
                    AccountsPayable,
                    vec![p(r"\baccounts payable\b"), p(r"\btrade payables\b")],
                ),
                (
                    Cfo,
                    vec![
                        p(r"\bnet cash provided by operating activities\b"),
                        p(r"\bcash flow from operations\b"),
                    ],
                ),
                (InterestPaid, vec![p(r"\binterest paid\b")]),
                (
                    PrincipalRepayment,
                    vec![
                        p(r"\b(principal|loan) repayments?\b"),
                        p(r"\brepayments? of borrowings?\b"),
                    ],
                ),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
