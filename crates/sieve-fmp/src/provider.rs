//! [`FmpClient`] as a sieve data source.

use crate::FmpClient;
use async_trait::async_trait;
use sieve_traits::{
    Constituent, FundamentalsProvider, FundamentalsSnapshot, Result, SieveError, Symbol,
    UniverseProvider,
};

#[async_trait]
impl FundamentalsProvider for FmpClient {
    fn name(&self) -> &str {
        "fmp"
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<FundamentalsSnapshot> {
        self.fundamental_data(symbol)
            .await
            .map(|data| data.to_snapshot())
            .map_err(|e| SieveError::fetch(symbol.clone(), e))
    }
}

#[async_trait]
impl UniverseProvider for FmpClient {
    async fn universe(&self) -> Result<Vec<Constituent>> {
        let listed = self
            .sp500_constituents()
            .await
            .map_err(|e| SieveError::Universe(e.to_string()))?;
        Ok(listed.into_iter().map(Constituent::from).collect())
    }
}
