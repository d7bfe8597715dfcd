#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sieve/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and collaborator traits for the sieve fundamental screener.
//!
//! This crate provides the data model shared by every other sieve crate:
//! raw provider snapshots, normalized fundamentals records, the error type,
//! and the capability traits the screening pipeline depends on.

/// The version of the sieve-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{Result, SieveError};
pub use provider::{FundamentalsProvider, UniverseProvider};
pub use types::{
    Constituent, FundamentalsRecord, FundamentalsSnapshot, REQUIRED_FIELDS, Symbol,
    UNKNOWN_SECTOR,
};
