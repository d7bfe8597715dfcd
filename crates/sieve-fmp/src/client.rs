//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{FundamentalData, IndexConstituent, Period, Profile, Quote, SharesFloat, StatementRow},
};
use reqwest::Client;
use std::{env, time::Duration};
use tracing::debug;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
    period: Period,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            period: Period::Annual,
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Replace the HTTP client with one that gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Statement period used by [`Self::fundamental_data`].
    #[must_use]
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        parse_body(&text)
    }

    /// Get income statements for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<StatementRow>> {
        self.get(&statement_endpoint("income-statement", symbol, period, limit))
            .await
    }

    /// Get balance sheets for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<StatementRow>> {
        self.get(&statement_endpoint(
            "balance-sheet-statement",
            symbol,
            period,
            limit,
        ))
        .await
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get the company profile (name, sector, industry) for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<Profile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        let profiles: Vec<Profile> = self.get(&endpoint).await?;
        profiles
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get share float and shares outstanding for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn shares_float(&self, symbol: &str) -> Result<SharesFloat> {
        let endpoint = format!("shares-float?symbol={}", symbol.to_uppercase());
        let floats: Vec<SharesFloat> = self.get(&endpoint).await?;
        floats
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get the current S&P 500 constituents.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn sp500_constituents(&self) -> Result<Vec<IndexConstituent>> {
        self.get("sp500-constituent").await
    }

    /// Get the most recent statements, quote, profile and float for a symbol.
    ///
    /// The requests run concurrently. A failing request only leaves its part
    /// empty; the call fails when every request fails.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::NoData`] carrying the income statement error if
    /// no request succeeded.
    pub async fn fundamental_data(&self, symbol: &str) -> Result<FundamentalData> {
        let (income, balance, quote, profile, float) = tokio::join!(
            self.income_statement(symbol, self.period, Some(1)),
            self.balance_sheet(symbol, self.period, Some(1)),
            self.quote(symbol),
            self.profile(symbol),
            self.shares_float(symbol),
        );

        if income.is_err()
            && balance.is_err()
            && quote.is_err()
            && profile.is_err()
            && float.is_err()
        {
            let cause = income
                .err()
                .unwrap_or_else(|| FmpError::SymbolNotFound(symbol.to_string()));
            return Err(FmpError::NoData {
                symbol: symbol.to_uppercase(),
                cause: Box::new(cause),
            });
        }

        Ok(FundamentalData {
            symbol: symbol.to_uppercase(),
            income_statements: logged(symbol, "income-statement", income).unwrap_or_default(),
            balance_sheets: logged(symbol, "balance-sheet-statement", balance).unwrap_or_default(),
            quote: logged(symbol, "quote", quote),
            profile: logged(symbol, "profile", profile),
            shares_float: logged(symbol, "shares-float", float),
        })
    }
}

fn statement_endpoint(path: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
    let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
    format!(
        "{path}?symbol={}&period={}{}",
        symbol.to_uppercase(),
        period.as_str(),
        limit_param
    )
}

/// Parse a response body, treating FMP's in-band error objects as errors.
fn parse_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    if text.contains("\"Error Message\"") || text.contains("\"error\"") {
        return Err(FmpError::Api(text.to_string()));
    }

    serde_json::from_str(text).map_err(|e| {
        FmpError::Json(serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to parse: {e}. Response: {text}"),
        )))
    })
}

fn logged<T>(symbol: &str, endpoint: &str, result: Result<T>) -> Option<T> {
    result
        .map_err(|e| debug!(symbol, endpoint, error = %e, "FMP endpoint unavailable"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("sp500-constituent"),
            "https://financialmodelingprep.com/stable/sp500-constituent?apikey=test_key"
        );
    }

    #[test]
    fn test_statement_endpoint() {
        assert_eq!(
            statement_endpoint("income-statement", "aapl", Period::Annual, Some(1)),
            "income-statement?symbol=AAPL&period=annual&limit=1"
        );
        assert_eq!(
            statement_endpoint("balance-sheet-statement", "MSFT", Period::Quarter, None),
            "balance-sheet-statement?symbol=MSFT&period=quarter"
        );
    }

    #[test]
    fn test_parse_body_error_message() {
        let result: Result<Vec<Quote>> =
            parse_body(r#"{"Error Message": "Invalid API KEY."}"#);
        assert!(matches!(result, Err(FmpError::Api(_))));
    }

    #[test]
    fn test_parse_body_invalid_json() {
        let result: Result<Vec<Quote>> = parse_body("<html>gateway timeout</html>");
        assert!(matches!(result, Err(FmpError::Json(_))));
    }

    #[test]
    fn test_parse_body_ok() {
        let quotes: Vec<Quote> =
            parse_body(r#"[{"symbol": "AAPL", "price": 10.5}]"#).unwrap();
        assert_eq!(quotes[0].price, Some(10.5));
    }

    #[test]
    fn test_with_period() {
        let client = FmpClient::new("k").with_period(Period::Quarter);
        assert_eq!(client.period, Period::Quarter);
    }
}
