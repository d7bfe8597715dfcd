//! Valuation, profitability and leverage ratios.

use serde::{Deserialize, Serialize};
use sieve_traits::FundamentalsRecord;

/// The six ratios the quality rules are stated in.
///
/// Values may be non-finite. A missing operand produces NaN and a zero
/// denominator produces an IEEE infinity (or NaN for `0 / 0`); these are kept
/// as computed and left for the rules to reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Gross profit over revenue, in percent.
    pub gross_margin_pct: f64,
    /// EBITDA over revenue, in percent.
    pub ebitda_margin_pct: f64,
    /// Net income over equity, in percent.
    pub roe_pct: f64,
    /// Price over earnings per share.
    pub pe_ratio: f64,
    /// Enterprise value over EBITDA.
    pub ev_ebitda_ratio: f64,
    /// Total debt over equity, in percent.
    pub debt_to_equity_pct: f64,
}

impl RatioSet {
    /// Field names in declaration order.
    pub const FIELDS: [&'static str; 6] = [
        "gross_margin_pct",
        "ebitda_margin_pct",
        "roe_pct",
        "pe_ratio",
        "ev_ebitda_ratio",
        "debt_to_equity_pct",
    ];

    /// Derive the ratios of a single record.
    #[must_use]
    pub fn from_record(record: &FundamentalsRecord) -> Self {
        let eps = quotient(record.net_income, record.shares_outstanding);

        Self {
            gross_margin_pct: 100.0 * quotient(record.gross_profit, record.revenue),
            ebitda_margin_pct: 100.0 * quotient(record.ebitda, record.revenue),
            roe_pct: 100.0 * quotient(record.net_income, record.equity),
            pe_ratio: quotient(record.price, Some(eps)),
            ev_ebitda_ratio: quotient(Some(record.enterprise_value()), record.ebitda),
            debt_to_equity_pct: 100.0 * quotient(record.total_debt, record.equity),
        }
    }

    /// Build a set from values in [`Self::FIELDS`] order.
    #[must_use]
    pub const fn from_array(values: [f64; 6]) -> Self {
        Self {
            gross_margin_pct: values[0],
            ebitda_margin_pct: values[1],
            roe_pct: values[2],
            pe_ratio: values[3],
            ev_ebitda_ratio: values[4],
            debt_to_equity_pct: values[5],
        }
    }

    /// Values in [`Self::FIELDS`] order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.gross_margin_pct,
            self.ebitda_margin_pct,
            self.roe_pct,
            self.pe_ratio,
            self.ev_ebitda_ratio,
            self.debt_to_equity_pct,
        ]
    }

    /// Whether any ratio is NaN or infinite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.as_array().iter().any(|v| !v.is_finite())
    }

    /// Names of the non-finite ratios.
    #[must_use]
    pub fn degenerate_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.as_array())
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// `numerator / denominator`, NaN when either side is unknown.
fn quotient(numerator: Option<f64>, denominator: Option<f64>) -> f64 {
    match (numerator, denominator) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}
