//! Ranked screening output.

use crate::Diagnostic;
use crate::diagnostics::DiagnosticKind;
use serde::Serialize;
use sieve_rules::{RatioSet, RuleOutcome, ScoreResult};
use sieve_traits::Symbol;
use std::collections::BTreeMap;

/// One ranked row of a screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenedEntity {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Company name, if the provider supplied one.
    pub name: Option<String>,
    /// Sector the entity was compared against.
    pub sector: String,
    /// The entity's own ratios.
    pub ratios: RatioSet,
    /// Mean ratios of its sector in this sample.
    pub sector_mean: RatioSet,
    /// Rule outcomes.
    pub rules: RuleOutcome,
    /// Composite score.
    pub score: ScoreResult,
}

/// Counts describing a run, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Distinct symbols requested.
    pub requested: usize,
    /// Snapshots successfully fetched.
    pub fetched: usize,
    /// Records that passed the completeness check and were scored.
    pub scoreable: usize,
    /// Scored entities classified as great.
    pub great: usize,
    /// Fetch failures.
    pub fetch_failures: usize,
    /// Records excluded for missing fields.
    pub incomplete: usize,
}

/// Result of a screening run: ranked rows plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenReport {
    /// Rows ordered by descending greatness score, ties in input order.
    pub rows: Vec<ScreenedEntity>,
    /// One entry per symbol that did not make it into `rows`.
    pub diagnostics: Vec<Diagnostic>,
    /// Distinct symbols requested.
    pub requested: usize,
    /// Snapshots successfully fetched.
    pub fetched: usize,
}

impl ScreenReport {
    /// The first `n` ranked rows.
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScreenedEntity] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Rows classified as great, in rank order.
    pub fn great(&self) -> impl Iterator<Item = &ScreenedEntity> {
        self.rows.iter().filter(|row| row.score.is_great)
    }

    /// Number of scored entities per sector.
    #[must_use]
    pub fn sectors(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.sector.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether no entity was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Run counters.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let count = |kind: DiagnosticKind| self.diagnostics.iter().filter(|d| d.kind == kind).count();

        ReportSummary {
            requested: self.requested,
            fetched: self.fetched,
            scoreable: self.rows.len(),
            great: self.great().count(),
            fetch_failures: count(DiagnosticKind::FetchFailure),
            incomplete: count(DiagnosticKind::IncompleteFundamentals),
        }
    }
}
