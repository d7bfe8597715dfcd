//! Data types for FMP API responses.
//!
//! Financial statements are kept as loose JSON objects because FMP has
//! renamed several line items between API vintages. Fields are read through
//! [`first_present`] with the alias tables in [`aliases`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Accepted field names per line item, most preferred first.
pub mod aliases {
    /// Total revenue.
    pub const REVENUE: &[&str] = &["revenue", "totalRevenue"];
    /// Gross profit.
    pub const GROSS_PROFIT: &[&str] = &["grossProfit"];
    /// Net income.
    pub const NET_INCOME: &[&str] = &["netIncome", "netIncomeFromContinuingOperations"];
    /// EBITDA.
    pub const EBITDA: &[&str] = &["ebitda", "EBITDA", "normalizedEbitda"];
    /// Weighted average shares, used when no float data is available.
    pub const WEIGHTED_SHARES: &[&str] = &["weightedAverageShsOut", "weightedAverageShsOutDil"];
    /// Shareholders' equity.
    pub const EQUITY: &[&str] = &[
        "totalStockholdersEquity",
        "stockholdersEquity",
        "totalEquity",
        "commonStockEquity",
    ];
    /// Total debt.
    pub const TOTAL_DEBT: &[&str] = &["totalDebt", "longTermDebt"];
    /// Cash and cash equivalents.
    pub const CASH: &[&str] = &["cashAndCashEquivalents", "cashAndShortTermInvestments"];
}

/// Try each alias in order and return the first present, finite value.
pub fn first_present<F>(aliases: &[&str], lookup: F) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    aliases
        .iter()
        .find_map(|alias| lookup(alias).filter(|v| v.is_finite()))
}

/// One financial statement period (income statement or balance sheet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementRow(Map<String, Value>);

impl StatementRow {
    /// Numeric value of the first alias present in this row.
    #[must_use]
    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        first_present(aliases, |key| self.0.get(key).and_then(Value::as_f64))
    }

    /// String value of `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Parse the `date` field into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.text("date")
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// The most recent row by filing date, falling back to the first row
    /// when no row carries a parseable date.
    #[must_use]
    pub fn latest(rows: &[Self]) -> Option<&Self> {
        rows.iter()
            .filter(|row| row.parsed_date().is_some())
            .max_by_key(|row| row.parsed_date())
            .or_else(|| rows.first())
    }
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Current price.
    pub price: Option<f64>,
    /// Market cap.
    pub market_cap: Option<f64>,
    /// Shares outstanding (older API vintages only).
    pub shares_outstanding: Option<f64>,
}

/// Company profile from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub company_name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Last price.
    pub price: Option<f64>,
    /// Market cap.
    #[serde(alias = "mktCap")]
    pub market_cap: Option<f64>,
}

/// Share float data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharesFloat {
    /// Ticker symbol.
    pub symbol: String,
    /// Observation date.
    pub date: Option<String>,
    /// Free float percentage.
    pub free_float: Option<f64>,
    /// Shares in the float.
    pub float_shares: Option<f64>,
    /// Total shares outstanding.
    pub outstanding_shares: Option<f64>,
}

/// Index constituent from FMP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConstituent {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Sub-sector classification.
    pub sub_sector: Option<String>,
}

/// Everything fetched for one symbol; each part may be missing.
#[derive(Debug, Clone, Default)]
pub struct FundamentalData {
    /// Ticker symbol.
    pub symbol: String,
    /// Income statements (most recent first).
    pub income_statements: Vec<StatementRow>,
    /// Balance sheets (most recent first).
    pub balance_sheets: Vec<StatementRow>,
    /// Current quote.
    pub quote: Option<Quote>,
    /// Company profile.
    pub profile: Option<Profile>,
    /// Share float.
    pub shares_float: Option<SharesFloat>,
}

impl FundamentalData {
    /// Get the most recent income statement.
    #[must_use]
    pub fn latest_income(&self) -> Option<&StatementRow> {
        StatementRow::latest(&self.income_statements)
    }

    /// Get the most recent balance sheet.
    #[must_use]
    pub fn latest_balance(&self) -> Option<&StatementRow> {
        StatementRow::latest(&self.balance_sheets)
    }

    /// Read a line item from the latest income statement.
    fn income(&self, aliases: &[&str]) -> Option<f64> {
        self.latest_income().and_then(|row| row.number(aliases))
    }

    /// Read a line item from the latest balance sheet.
    fn balance(&self, aliases: &[&str]) -> Option<f64> {
        self.latest_balance().and_then(|row| row.number(aliases))
    }

    /// Shares outstanding: float data, then weighted average shares from the
    /// income statement, then the quote.
    #[must_use]
    pub fn shares_outstanding(&self) -> Option<f64> {
        self.shares_float
            .as_ref()
            .and_then(|f| f.outstanding_shares)
            .filter(|v| v.is_finite())
            .or_else(|| self.income(aliases::WEIGHTED_SHARES))
            .or_else(|| self.quote.as_ref().and_then(|q| q.shares_outstanding))
    }

    /// Latest price, from the quote or else the profile.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.quote
            .as_ref()
            .and_then(|q| q.price)
            .or_else(|| self.profile.as_ref().and_then(|p| p.price))
    }

    /// Market cap, from the quote or else the profile.
    #[must_use]
    pub fn market_cap(&self) -> Option<f64> {
        self.quote
            .as_ref()
            .and_then(|q| q.market_cap)
            .or_else(|| self.profile.as_ref().and_then(|p| p.market_cap))
    }

    /// Flatten into the provider-neutral snapshot.
    #[must_use]
    pub fn to_snapshot(&self) -> sieve_traits::FundamentalsSnapshot {
        let name = self
            .profile
            .as_ref()
            .and_then(|p| p.company_name.clone())
            .or_else(|| self.quote.as_ref().and_then(|q| q.name.clone()));

        sieve_traits::FundamentalsSnapshot {
            name,
            total_revenue: self.income(aliases::REVENUE),
            gross_profit: self.income(aliases::GROSS_PROFIT),
            net_income: self.income(aliases::NET_INCOME),
            ebitda: self.income(aliases::EBITDA),
            equity: self.balance(aliases::EQUITY),
            total_debt: self.balance(aliases::TOTAL_DEBT),
            cash_and_equivalents: self.balance(aliases::CASH),
            price: self.price(),
            shares_outstanding: self.shares_outstanding(),
            market_cap: self.market_cap(),
            sector: self.profile.as_ref().and_then(|p| p.sector.clone()),
        }
    }
}

impl From<IndexConstituent> for sieve_traits::Constituent {
    fn from(c: IndexConstituent) -> Self {
        Self {
            symbol: c.symbol,
            name: c.name,
            sector: c.sector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<StatementRow> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_present_priority() {
        let lookup = |key: &str| match key {
            "b" => Some(2.0),
            "c" => Some(3.0),
            "nan" => Some(f64::NAN),
            _ => None,
        };
        assert_eq!(first_present(&["a", "b", "c"], lookup), Some(2.0));
        assert_eq!(first_present(&["c", "b"], lookup), Some(3.0));
        assert_eq!(first_present(&["nan", "c"], lookup), Some(3.0));
        assert_eq!(first_present(&["a"], lookup), None);
    }

    #[test]
    fn test_statement_alias_lookup() {
        let balance = rows(
            r#"[{"date": "2024-09-28", "symbol": "AAPL", "totalEquity": 56950000000,
                 "totalDebt": null, "longTermDebt": 85750000000}]"#,
        );
        let row = &balance[0];
        assert_eq!(row.number(aliases::EQUITY), Some(56_950_000_000.0));
        // null does not count as present
        assert_eq!(row.number(aliases::TOTAL_DEBT), Some(85_750_000_000.0));
        assert_eq!(row.number(aliases::CASH), None);
    }

    #[test]
    fn test_alias_preference() {
        let balance = rows(r#"[{"totalStockholdersEquity": 10, "totalEquity": 12}]"#);
        assert_eq!(balance[0].number(aliases::EQUITY), Some(10.0));
    }

    #[test]
    fn test_latest_by_date() {
        let income = rows(
            r#"[{"date": "2022-12-31", "revenue": 1},
                {"date": "2024-12-31", "revenue": 3},
                {"date": "2023-12-31", "revenue": 2}]"#,
        );
        let latest = StatementRow::latest(&income).unwrap();
        assert_eq!(latest.number(aliases::REVENUE), Some(3.0));

        let undated = rows(r#"[{"revenue": 7}, {"revenue": 8}]"#);
        let latest = StatementRow::latest(&undated).unwrap();
        assert_eq!(latest.number(aliases::REVENUE), Some(7.0));

        assert!(StatementRow::latest(&[]).is_none());
    }

    #[test]
    fn test_quote_and_profile_parse() {
        let quote: Vec<Quote> = serde_json::from_str(
            r#"[{"symbol": "AAPL", "name": "Apple Inc.", "price": 232.5,
                 "marketCap": 3500000000000, "volume": 100}]"#,
        )
        .unwrap();
        assert_eq!(quote[0].price, Some(232.5));
        assert_eq!(quote[0].shares_outstanding, None);

        let profile: Vec<Profile> = serde_json::from_str(
            r#"[{"symbol": "AAPL", "companyName": "Apple Inc.", "sector": "Technology",
                 "mktCap": 3400000000000}]"#,
        )
        .unwrap();
        assert_eq!(profile[0].sector.as_deref(), Some("Technology"));
        assert_eq!(profile[0].market_cap, Some(3_400_000_000_000.0));
    }

    #[test]
    fn test_to_snapshot() {
        let data = FundamentalData {
            symbol: "ACME".to_string(),
            income_statements: rows(
                r#"[{"date": "2024-12-31", "revenue": 100, "grossProfit": 40,
                     "netIncome": 20, "ebitda": 25, "weightedAverageShsOut": 9}]"#,
            ),
            balance_sheets: rows(
                r#"[{"date": "2024-12-31", "totalStockholdersEquity": 100,
                     "totalDebt": 30, "cashAndCashEquivalents": 5}]"#,
            ),
            quote: None,
            profile: Some(Profile {
                symbol: "ACME".to_string(),
                company_name: Some("Acme Corp".to_string()),
                sector: Some("Industrials".to_string()),
                price: Some(40.0),
                market_cap: Some(400.0),
                ..Default::default()
            }),
            shares_float: Some(SharesFloat {
                symbol: "ACME".to_string(),
                outstanding_shares: Some(10.0),
                ..Default::default()
            }),
        };

        let snapshot = data.to_snapshot();
        assert_eq!(snapshot.name.as_deref(), Some("Acme Corp"));
        assert_eq!(snapshot.total_revenue, Some(100.0));
        assert_eq!(snapshot.ebitda, Some(25.0));
        assert_eq!(snapshot.equity, Some(100.0));
        assert_eq!(snapshot.cash_and_equivalents, Some(5.0));
        assert_eq!(snapshot.price, Some(40.0));
        assert_eq!(snapshot.market_cap, Some(400.0));
        assert_eq!(snapshot.shares_outstanding, Some(10.0));
        assert_eq!(snapshot.sector.as_deref(), Some("Industrials"));
    }

    #[test]
    fn test_shares_fallback_chain() {
        let mut data = FundamentalData {
            income_statements: rows(r#"[{"weightedAverageShsOut": 9}]"#),
            quote: Some(Quote {
                shares_outstanding: Some(11.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(data.shares_outstanding(), Some(9.0));

        data.income_statements.clear();
        assert_eq!(data.shares_outstanding(), Some(11.0));

        data.quote = None;
        assert_eq!(data.shares_outstanding(), None);
    }

    #[test]
    fn test_empty_data_is_all_unknown() {
        let snapshot = FundamentalData::default().to_snapshot();
        assert_eq!(snapshot, sieve_traits::FundamentalsSnapshot::default());
    }

    #[test]
    fn test_constituent_conversion() {
        let listed: Vec<IndexConstituent> = serde_json::from_str(
            r#"[{"symbol": "MMM", "name": "3M", "sector": "Industrials",
                 "subSector": "Industrial Conglomerates"}]"#,
        )
        .unwrap();
        let constituent: sieve_traits::Constituent = listed[0].clone().into();
        assert_eq!(constituent.symbol, "MMM");
        assert_eq!(constituent.sector.as_deref(), Some("Industrials"));
    }
}
