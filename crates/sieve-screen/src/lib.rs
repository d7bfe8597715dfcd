//! Screening pipeline for sieve.
//!
//! Orchestrates a full screen over a batch of symbols:
//! 1. Fetch snapshots from a [`sieve_traits::FundamentalsProvider`] with
//!    bounded concurrency
//! 2. Normalize and drop records that cannot be scored
//! 3. Derive ratios, sector means, rule outcomes and scores
//! 4. Rank by descending greatness score
//!
//! Per-entity failures never abort a run; they are returned as
//! [`Diagnostic`]s next to the ranked rows.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod diagnostics;
pub mod pipeline;
pub mod presenter;
pub mod report;

pub use config::ScreenConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use pipeline::Screener;
pub use presenter::Presenter;
pub use report::{ReportSummary, ScreenReport, ScreenedEntity};
