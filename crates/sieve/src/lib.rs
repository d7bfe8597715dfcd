#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sieve/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # sieve
//!
//! A sector-relative fundamental stock screener.
//!
//! sieve fetches the latest fundamentals for a batch of symbols, derives six
//! ratios per company, compares each company against the mean of its sector
//! within the same batch, and ranks the batch by a 0-100 greatness score.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ FundamentalsProvider │  FMP, or anything else implementing the trait
//! └──────────┬───────────┘
//!            │ FundamentalsSnapshot
//!            ▼
//! ┌──────────────────────┐
//! │      Screener        │  bounded fetch, completeness filter
//! └──────────┬───────────┘
//!            │ FundamentalsRecord
//!            ▼
//! ┌──────────────────────┐
//! │ RatioSet/SectorStats │  per-company ratios and sector means
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │ RuleOutcome / Score  │  six rules, greatness score
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │    ScreenReport      │  ranked rows plus diagnostics
//! └──────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sieve::prelude::*;
//! use sieve::fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let screener = Screener::new(ScreenConfig::default())?;
//!
//!     let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
//!     let report = screener.run(&client, &symbols).await;
//!
//!     for row in report.top(10) {
//!         println!("{:<6} {:>6.2}", row.symbol, row.score.greatness_score);
//!     }
//!     Ok(())
//! }
//! ```

/// Version information for the sieve crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Data model, error type and provider traits.
///
/// - [`FundamentalsProvider`] - Delivers a snapshot per symbol
/// - [`UniverseProvider`] - Lists the symbols of a screening universe
/// - [`FundamentalsRecord`] - Normalized facts the rules run on
pub mod traits {
    pub use sieve_traits::*;
}

pub use sieve_traits::{FundamentalsProvider, UniverseProvider};
pub use sieve_traits::{Result, SieveError};
pub use sieve_traits::{Constituent, FundamentalsRecord, FundamentalsSnapshot, Symbol};

// ============================================================================
// Rules
// ============================================================================

/// Ratios, sector means, the six rules and the greatness score.
///
/// | Rule  | Ratio           | Passes when                          |
/// |-------|-----------------|--------------------------------------|
/// | rule1 | Gross margin %  | `>= 35` or `>=` sector mean          |
/// | rule2 | EBITDA margin % | `>= 15` or `>=` sector mean          |
/// | rule3 | ROE %           | `> 0`, `>= 15` and `>=` sector mean  |
/// | rule4 | P/E             | `> 0`, `<= 20` and `<=` sector mean  |
/// | rule5 | EV/EBITDA       | `> 0`, `<= 10` and `<=` sector mean  |
/// | rule6 | Debt/Equity %   | `> 0`, `<= 50` and `<=` sector mean  |
///
/// An entity is great when its score reaches
/// [`GREATNESS_THRESHOLD`](sieve_rules::GREATNESS_THRESHOLD).
pub mod rules {
    pub use sieve_rules::*;
}

pub use sieve_rules::{RatioSet, Rule, RuleOutcome, ScoreResult, SectorStats};

// ============================================================================
// Screening
// ============================================================================

/// The screening pipeline and its report.
pub mod screen {
    pub use sieve_screen::*;
}

pub use sieve_screen::{Presenter, ScreenConfig, ScreenReport, Screener};

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// Set the `FMP_API_KEY` environment variable or add it to a `.env` file.
pub mod fmp {
    pub use sieve_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use sieve::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{FundamentalsProvider, Presenter, UniverseProvider};
    pub use crate::{Result, SieveError};
    pub use crate::{ScreenConfig, ScreenReport, Screener};
    pub use crate::{FundamentalsRecord, FundamentalsSnapshot, Symbol};
}
