//! Capability traits for the screener's data sources.
//!
//! The screening engine never talks to a data vendor directly. It asks a
//! [`FundamentalsProvider`] for one snapshot at a time and, when no explicit
//! symbol list is given, a [`UniverseProvider`] for the tickers to screen.

use crate::{Constituent, FundamentalsSnapshot, Result, Symbol};
use async_trait::async_trait;

/// A source of per-symbol fundamentals.
///
/// Implementations must be thread-safe (`Send + Sync`) so that the pipeline
/// can keep several fetches in flight.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use sieve_traits::{FundamentalsProvider, FundamentalsSnapshot, Result, Symbol};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl FundamentalsProvider for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     async fn fetch(&self, _symbol: &Symbol) -> Result<FundamentalsSnapshot> {
///         Ok(FundamentalsSnapshot::default())
///     }
/// }
/// ```
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Fetch the most recent raw fundamentals for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SieveError::FetchFailure`] when nothing usable could
    /// be obtained for the symbol. Individual missing fields are not errors;
    /// they are left as `None` in the snapshot.
    async fn fetch(&self, symbol: &Symbol) -> Result<FundamentalsSnapshot>;
}

/// A source of the ticker universe to screen.
#[async_trait]
pub trait UniverseProvider: Send + Sync {
    /// List the universe constituents in the source's order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SieveError::Universe`] if the listing is unavailable.
    async fn universe(&self) -> Result<Vec<Constituent>>;
}
