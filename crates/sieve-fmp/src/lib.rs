//! Financial Modeling Prep (FMP) fundamentals provider for sieve.
//!
//! This crate fetches statements, quotes, profiles and share counts from
//! the [Financial Modeling Prep](https://financialmodelingprep.com/) API and
//! exposes them through the [`sieve_traits::FundamentalsProvider`] and
//! [`sieve_traits::UniverseProvider`] traits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sieve_fmp::FmpClient;
//! use sieve_traits::FundamentalsProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Raw, per-endpoint data
//!     let data = client.fundamental_data("AAPL").await?;
//!
//!     // Provider-neutral snapshot
//!     let snapshot = client.fetch(&"AAPL".to_string()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
