//! Common types used throughout the sieve screener.
//!
//! A provider delivers a [`FundamentalsSnapshot`] per symbol. The pipeline
//! normalizes it into a [`FundamentalsRecord`], which is what the ratio
//! calculator consumes.

use serde::{Deserialize, Serialize};

/// A market symbol identifier, typically a ticker like "AAPL".
pub type Symbol = String;

/// Sector assigned to records whose provider reported none.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Fields a record must carry to be scoreable, in reporting order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "equity",
    "revenue",
    "ebitda",
    "net_income",
    "shares_outstanding",
];

/// Best-effort raw fundamentals for one symbol, as delivered by a provider.
///
/// Every field is optional: a provider that could not find a value leaves it
/// as `None` rather than reporting zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    /// Company name, when the provider knows it.
    pub name: Option<String>,
    /// Trailing total revenue.
    pub total_revenue: Option<f64>,
    /// Trailing gross profit.
    pub gross_profit: Option<f64>,
    /// Trailing net income.
    pub net_income: Option<f64>,
    /// Trailing EBITDA.
    pub ebitda: Option<f64>,
    /// Most recent shareholders' equity.
    pub equity: Option<f64>,
    /// Most recent total debt.
    pub total_debt: Option<f64>,
    /// Most recent cash and cash equivalents.
    pub cash_and_equivalents: Option<f64>,
    /// Latest traded price.
    pub price: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Sector classification.
    pub sector: Option<String>,
}

/// Normalized per-entity snapshot of financial facts.
///
/// Unlike [`FundamentalsSnapshot`], the record always has a sector (falling
/// back to [`UNKNOWN_SECTOR`]) and never holds a non-finite fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRecord {
    /// Ticker symbol (unique key).
    pub symbol: Symbol,
    /// Company name, if known.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: String,
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Gross profit.
    pub gross_profit: Option<f64>,
    /// EBITDA.
    pub ebitda: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,
    /// Shareholders' equity.
    pub equity: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Latest price.
    pub price: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Total debt.
    pub total_debt: Option<f64>,
    /// Cash and cash equivalents.
    pub cash_equivalents: Option<f64>,
}

impl FundamentalsRecord {
    /// Create an empty record for `symbol` in the unknown sector.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            sector: UNKNOWN_SECTOR.to_string(),
            revenue: None,
            gross_profit: None,
            ebitda: None,
            net_income: None,
            equity: None,
            shares_outstanding: None,
            price: None,
            market_cap: None,
            total_debt: None,
            cash_equivalents: None,
        }
    }

    /// Build a record from a provider snapshot.
    ///
    /// NaN or infinite facts are treated as unknown; a missing or blank
    /// sector becomes [`UNKNOWN_SECTOR`].
    #[must_use]
    pub fn from_snapshot(symbol: impl Into<Symbol>, snapshot: FundamentalsSnapshot) -> Self {
        let sector = snapshot
            .sector
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SECTOR.to_string());

        Self {
            symbol: symbol.into(),
            name: snapshot.name,
            sector,
            revenue: finite(snapshot.total_revenue),
            gross_profit: finite(snapshot.gross_profit),
            ebitda: finite(snapshot.ebitda),
            net_income: finite(snapshot.net_income),
            equity: finite(snapshot.equity),
            shares_outstanding: finite(snapshot.shares_outstanding),
            price: finite(snapshot.price),
            market_cap: finite(snapshot.market_cap),
            total_debt: finite(snapshot.total_debt),
            cash_equivalents: finite(snapshot.cash_and_equivalents),
        }
    }

    /// Enterprise value: market cap plus total debt minus cash.
    ///
    /// This is the only derivation where an unknown operand counts as zero.
    #[must_use]
    pub fn enterprise_value(&self) -> f64 {
        coalesce(self.market_cap) + coalesce(self.total_debt) - coalesce(self.cash_equivalents)
    }

    /// Names of the required fields this record lacks, in [`REQUIRED_FIELDS`] order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        let present = [
            self.equity.is_some(),
            self.revenue.is_some(),
            self.ebitda.is_some(),
            self.net_income.is_some(),
            self.shares_outstanding.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Whether every required field is present.
    #[must_use]
    pub fn is_scoreable(&self) -> bool {
        self.missing_required().is_empty()
    }
}

/// One member of a ticker universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Company name.
    pub name: Option<String>,
    /// Sector classification as listed by the universe source.
    pub sector: Option<String>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn coalesce(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}
