//! Error types for the sieve screener.
//!
//! Per-entity failures ([`SieveError::FetchFailure`] and
//! [`SieveError::IncompleteFundamentals`]) are never fatal to a screening run.
//! The pipeline turns them into diagnostics; they only travel as `Err` values
//! across the provider seam.

use thiserror::Error;

/// The main error type for sieve operations.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Raw fundamentals for a single symbol could not be obtained.
    #[error("Failed to fetch fundamentals for {symbol}: {reason}")]
    FetchFailure {
        /// Symbol whose fetch failed.
        symbol: String,
        /// Provider-specific reason.
        reason: String,
    },

    /// A record lacks one or more fields required for scoring.
    #[error("Incomplete fundamentals for {symbol}: missing {}", .missing.join(", "))]
    IncompleteFundamentals {
        /// Symbol of the excluded record.
        symbol: String,
        /// Names of the missing fields.
        missing: Vec<&'static str>,
    },

    /// The screen configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The ticker universe could not be listed.
    #[error("Universe unavailable: {0}")]
    Universe(String),

    /// Writing a report to its destination failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl SieveError {
    /// Build a [`SieveError::FetchFailure`] from any displayable reason.
    pub fn fetch(symbol: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::FetchFailure {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<String> for SieveError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SieveError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for sieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;
