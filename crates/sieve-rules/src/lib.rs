//! Screening rules for the sieve fundamental screener.
//!
//! This crate holds the pure, synchronous part of a screen:
//! - [`RatioSet`]: six valuation, profitability and leverage ratios
//! - [`SectorStats`]: per-sector means of those ratios over the sample
//! - [`Rule`] / [`RuleOutcome`]: the six strict pass/fail rules
//! - [`ScoreResult`]: the 0-100 greatness score and its classification
//!
//! # Example
//!
//! ```
//! use sieve_rules::{RatioSet, RuleOutcome, ScoreResult, SectorStats};
//! use sieve_traits::FundamentalsRecord;
//!
//! let mut record = FundamentalsRecord::new("ACME");
//! record.revenue = Some(100.0);
//! record.gross_profit = Some(40.0);
//!
//! let ratios = RatioSet::from_record(&record);
//! let stats = SectorStats::from_members([(record.sector.as_str(), &ratios)]);
//! let mean = stats.mean_for(&record.sector).copied().unwrap_or(ratios);
//! let score = ScoreResult::from_outcome(&RuleOutcome::evaluate(&ratios, &mean));
//! assert!(!score.is_great);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod ratios;
pub mod rules;
pub mod score;
pub mod sector;

// Re-export key types
pub use ratios::RatioSet;
pub use rules::{Rule, RuleOutcome};
pub use score::{GREATNESS_THRESHOLD, ScoreResult};
pub use sector::SectorStats;
