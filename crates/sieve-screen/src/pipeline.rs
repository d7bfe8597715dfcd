//! Screening pipeline: fetch, filter, derive, aggregate, evaluate, score, rank.

use crate::{Diagnostic, ScreenConfig, ScreenReport, ScreenedEntity};
use futures_util::stream::{self, StreamExt};
use sieve_rules::{RatioSet, RuleOutcome, ScoreResult, SectorStats};
use sieve_traits::{FundamentalsProvider, FundamentalsRecord, Result, SieveError, Symbol};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Runs screens over a batch of symbols.
///
/// # Example
///
/// ```rust,ignore
/// use sieve_screen::{ScreenConfig, Screener};
///
/// let screener = Screener::new(ScreenConfig::default())?;
/// let report = screener.run(&provider, &symbols).await;
/// for row in report.top(10) {
///     println!("{} {:.2}", row.symbol, row.score.greatness_score);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Screener {
    config: ScreenConfig,
}

impl Screener {
    /// Create a screener.
    ///
    /// # Errors
    ///
    /// Returns [`sieve_traits::SieveError::InvalidConfig`] if the
    /// configuration does not validate.
    pub fn new(config: ScreenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this screener runs with.
    #[must_use]
    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Fetch and screen `symbols`.
    ///
    /// Duplicate symbols are screened once. At most `batch_size` fetches are
    /// in flight at a time and their results are collected in input order, so
    /// completion order never affects the report. A failed fetch is recorded
    /// as a diagnostic and the run continues.
    pub async fn run<P>(&self, provider: &P, symbols: &[Symbol]) -> ScreenReport
    where
        P: FundamentalsProvider + ?Sized,
    {
        let symbols = dedup(symbols);
        info!(
            provider = provider.name(),
            symbols = symbols.len(),
            batch_size = self.config.batch_size,
            "Fetching fundamentals"
        );

        let fetched: Vec<_> = stream::iter(&symbols)
            .map(|symbol| async move { (symbol, provider.fetch(symbol).await) })
            .buffered(self.config.batch_size)
            .collect()
            .await;

        let mut diagnostics = Vec::new();
        let mut records = Vec::with_capacity(fetched.len());
        for (symbol, result) in fetched {
            match result {
                Ok(snapshot) => {
                    records.push(FundamentalsRecord::from_snapshot(symbol.clone(), snapshot));
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Fetch failed");
                    diagnostics.push(Diagnostic::from_error(symbol.clone(), &e));
                }
            }
        }

        let mut report = Self::evaluate(records);
        report.requested = symbols.len();

        // present diagnostics in input order whatever stage produced them
        let position: HashMap<&str, usize> = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();
        diagnostics.append(&mut report.diagnostics);
        diagnostics.sort_by_key(|d| {
            position
                .get(d.symbol.as_str())
                .copied()
                .unwrap_or(usize::MAX)
        });
        report.diagnostics = diagnostics;

        info!(
            requested = report.requested,
            fetched = report.fetched,
            scored = report.rows.len(),
            "Screen complete"
        );
        report
    }

    /// Screen already-fetched records.
    ///
    /// Records missing a required field are excluded and reported. The rest
    /// are scored against the means of their sector within this batch, then
    /// ranked by descending greatness score with ties kept in input order.
    /// An empty or fully excluded batch yields an empty report.
    #[must_use]
    pub fn evaluate(records: Vec<FundamentalsRecord>) -> ScreenReport {
        let fetched = records.len();
        let mut diagnostics = Vec::new();

        let scoreable: Vec<FundamentalsRecord> = records
            .into_iter()
            .filter(|record| {
                let missing = record.missing_required();
                if missing.is_empty() {
                    return true;
                }
                debug!(symbol = %record.symbol, missing = ?missing, "Excluding incomplete record");
                let error = SieveError::IncompleteFundamentals {
                    symbol: record.symbol.clone(),
                    missing,
                };
                diagnostics.push(Diagnostic::from_error(record.symbol.clone(), &error));
                false
            })
            .collect();

        let ratios: Vec<RatioSet> = scoreable.iter().map(RatioSet::from_record).collect();
        for (record, set) in scoreable.iter().zip(&ratios) {
            if set.is_degenerate() {
                debug!(
                    symbol = %record.symbol,
                    fields = ?set.degenerate_fields(),
                    "Non-finite ratios"
                );
            }
        }

        let stats = SectorStats::from_members(
            scoreable
                .iter()
                .zip(&ratios)
                .map(|(record, set)| (record.sector.as_str(), set)),
        );
        debug!(sectors = stats.len(), "Sector means computed");

        let mut rows: Vec<ScreenedEntity> = scoreable
            .into_iter()
            .zip(ratios)
            .map(|(record, ratios)| {
                let sector_mean = stats.mean_for(&record.sector).copied().unwrap_or(ratios);
                let rules = RuleOutcome::evaluate(&ratios, &sector_mean);
                let score = ScoreResult::from_outcome(&rules);
                ScreenedEntity {
                    symbol: record.symbol,
                    name: record.name,
                    sector: record.sector,
                    ratios,
                    sector_mean,
                    rules,
                    score,
                }
            })
            .collect();

        // stable: equal scores keep input order
        rows.sort_by(|a, b| b.score.greatness_score.total_cmp(&a.score.greatness_score));

        ScreenReport {
            rows,
            diagnostics,
            requested: fetched,
            fetched,
        }
    }
}

fn dedup(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut seen = HashSet::with_capacity(symbols.len());
    let mut unique = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        if seen.insert(symbol.as_str()) {
            unique.push(symbol.clone());
        } else {
            warn!(symbol = %symbol, "Duplicate symbol ignored");
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticKind;
    use approx::assert_relative_eq;

    fn record(symbol: &str, sector: &str) -> FundamentalsRecord {
        let mut record = FundamentalsRecord::new(symbol);
        record.sector = sector.to_string();
        record.revenue = Some(100.0);
        record.gross_profit = Some(40.0);
        record.ebitda = Some(20.0);
        record.net_income = Some(20.0);
        record.equity = Some(100.0);
        record.shares_outstanding = Some(10.0);
        record.price = Some(40.0);
        record.market_cap = Some(400.0);
        record.total_debt = Some(0.0);
        record.cash_equivalents = Some(0.0);
        record
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScreenConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            Screener::new(config),
            Err(SieveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_reference_scenario() {
        let report = Screener::evaluate(vec![record("A", "Tech")]);
        assert_eq!(report.rows.len(), 1);

        let row = &report.rows[0];
        assert_relative_eq!(row.ratios.gross_margin_pct, 40.0);
        assert_relative_eq!(row.ratios.pe_ratio, 20.0);
        assert_relative_eq!(row.ratios.ev_ebitda_ratio, 20.0);
        assert_eq!(row.rules.as_array(), [true, true, true, true, false, false]);
        assert_relative_eq!(row.score.greatness_score, 400.0 / 6.0, epsilon = 1e-12);
        assert!(!row.score.is_great);
    }

    #[test]
    fn test_missing_equity_excluded() {
        let mut incomplete = record("B", "Tech");
        incomplete.equity = None;

        let report = Screener::evaluate(vec![record("A", "Tech"), incomplete]);
        assert_eq!(report.rows.len(), 1);
        assert!(report.rows.iter().all(|r| r.symbol != "B"));
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].symbol, "B");
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::IncompleteFundamentals
        );
        assert_eq!(report.diagnostics[0].reason, "missing equity");
    }

    #[test]
    fn test_excluded_records_do_not_shift_sector_mean() {
        // B would drag the Tech mean ROE down to 10% if it were pooled
        let mut incomplete = record("B", "Tech");
        incomplete.net_income = Some(0.0);
        incomplete.shares_outstanding = None;

        let report = Screener::evaluate(vec![record("A", "Tech"), incomplete]);
        assert_relative_eq!(report.rows[0].sector_mean.roe_pct, 20.0);
    }

    #[test]
    fn test_ranking_is_stable_and_descending() {
        // ROE and P/E fail: 2 of 6
        let mut weak = record("W", "Energy");
        weak.net_income = Some(5.0);

        let records = vec![
            record("A", "Tech"),
            weak,
            record("B", "Health"),
            record("C", "Finance"),
        ];
        let report = Screener::evaluate(records);
        let order: Vec<&str> = report.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "W"]);

        let scores: Vec<f64> = report.rows.iter().map(|r| r.score.greatness_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_zero_ebitda_relies_on_sector_disjunct() {
        let mut flat = record("Z", "Tech");
        flat.ebitda = Some(0.0);
        let report = Screener::evaluate(vec![flat.clone()]);
        let row = &report.rows[0];
        assert_relative_eq!(row.ratios.ebitda_margin_pct, 0.0);
        // alone in its sector: 0 >= mean(0)
        assert!(row.rules.rule2);

        let report = Screener::evaluate(vec![flat, record("P", "Tech")]);
        let row = report.rows.iter().find(|r| r.symbol == "Z").unwrap();
        assert!(!row.rules.rule2);
    }

    #[test]
    fn test_all_excluded_is_empty_report() {
        let report = Screener::evaluate(vec![FundamentalsRecord::new("X")]);
        assert!(report.is_empty());
        assert_eq!(report.fetched, 1);
        assert_eq!(report.diagnostics.len(), 1);

        let report = Screener::evaluate(Vec::new());
        assert!(report.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let symbols: Vec<Symbol> = ["B", "A", "B", "C", "A"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup(&symbols), vec!["B", "A", "C"]);
    }
}
