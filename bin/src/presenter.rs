//! Terminal rendering of screen reports.

use crate::export;
use sieve_rules::{GREATNESS_THRESHOLD, RuleOutcome};
use sieve_screen::{Presenter, ScreenReport, ScreenedEntity};
use sieve_traits::Result;
use std::{
    fmt::Write as _,
    io::{self, Write},
    path::Path,
};

/// Width of a full (100) bar in the score chart.
const CHART_WIDTH: usize = 40;

/// Widest sector label printed in the table.
const SECTOR_WIDTH: usize = 22;

/// Prints reports to stdout and exports them as CSV.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerminalPresenter {
    great_only: bool,
}

impl TerminalPresenter {
    pub(crate) const fn new(great_only: bool) -> Self {
        Self { great_only }
    }
}

impl Presenter for TerminalPresenter {
    fn render_table(&self, report: &ScreenReport) -> Result<()> {
        write_stdout(&format_table(report, self.great_only))
    }

    fn render_chart(&self, report: &ScreenReport, top_n: usize) -> Result<()> {
        write_stdout(&format_chart(report, top_n))
    }

    fn export(&self, report: &ScreenReport, path: &Path) -> Result<()> {
        export::write_csv(report, path)
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn ratio(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

fn rule_marks(rules: &RuleOutcome) -> String {
    rules
        .as_array()
        .iter()
        .map(|&passed| if passed { '✓' } else { '✗' })
        .collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

/// Ranked table, run summary and diagnostics.
pub(crate) fn format_table(report: &ScreenReport, great_only: bool) -> String {
    let mut out = String::new();
    let summary = report.summary();

    let _ = writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║                     Fundamental Screen                       ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n");
    let _ = writeln!(
        out,
        "Requested: {}  Fetched: {}  Scored: {}  Great: {}",
        summary.requested, summary.fetched, summary.scoreable, summary.great
    );
    let _ = writeln!(out);

    let rows: Vec<(usize, &ScreenedEntity)> = report
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !great_only || row.score.is_great)
        .map(|(i, row)| (i + 1, row))
        .collect();

    if report.is_empty() {
        let _ = writeln!(out, "No scoreable entities.");
    } else if rows.is_empty() {
        let _ = writeln!(
            out,
            "No entities reached a greatness score of {GREATNESS_THRESHOLD:.0}."
        );
    } else {
        let _ = writeln!(
            out,
            "{:>4}  {:<8} {:<w$} {:>8} {:>8} {:>8} {:>8} {:>9} {:>8}  {:<6} {:>7}  {}",
            "Rank",
            "Symbol",
            "Sector",
            "GM%",
            "EBITDA%",
            "ROE%",
            "P/E",
            "EV/EBITDA",
            "D/E%",
            "Rules",
            "Score",
            "Great",
            w = SECTOR_WIDTH
        );
        let _ = writeln!(out, "{}", "─".repeat(116));

        for (rank, row) in rows {
            let r = &row.ratios;
            let _ = writeln!(
                out,
                "{:>4}  {:<8} {:<w$} {:>8} {:>8} {:>8} {:>8} {:>9} {:>8}  {:<6} {:>7.2}  {}",
                rank,
                row.symbol,
                truncate(&row.sector, SECTOR_WIDTH),
                ratio(r.gross_margin_pct),
                ratio(r.ebitda_margin_pct),
                ratio(r.roe_pct),
                ratio(r.pe_ratio),
                ratio(r.ev_ebitda_ratio),
                ratio(r.debt_to_equity_pct),
                rule_marks(&row.rules),
                row.score.display_score(),
                if row.score.is_great { "yes" } else { "" },
                w = SECTOR_WIDTH
            );
        }
    }

    if !report.diagnostics.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        let _ = writeln!(out, "DIAGNOSTICS ({})", report.diagnostics.len());
        let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        for diagnostic in &report.diagnostics {
            let _ = writeln!(out, "  {diagnostic}");
        }
    }

    let _ = writeln!(out);
    out
}

/// Horizontal bar chart of the greatness scores of the top `top_n` rows.
pub(crate) fn format_chart(report: &ScreenReport, top_n: usize) -> String {
    let mut out = String::new();
    let top = report.top(top_n);
    if top.is_empty() {
        return out;
    }

    let _ = writeln!(out, "TOP {} BY GREATNESS SCORE", top.len());
    let _ = writeln!(out, "{}", "─".repeat(CHART_WIDTH + 18));
    for row in top {
        let score = row.score.greatness_score.clamp(0.0, 100.0);
        let filled = (score / 100.0 * CHART_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<8} │{}{} {:>6.2}",
            row.symbol,
            "█".repeat(filled),
            " ".repeat(CHART_WIDTH - filled),
            row.score.display_score()
        );
    }
    let _ = writeln!(out);
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sieve_screen::Diagnostic;
    use sieve_traits::SieveError;

    fn entity(symbol: &str, sector: &str, passed: usize) -> ScreenedEntity {
        let flags: Vec<bool> = (0..6).map(|i| i < passed).collect();
        let rules = RuleOutcome {
            rule1: flags[0],
            rule2: flags[1],
            rule3: flags[2],
            rule4: flags[3],
            rule5: flags[4],
            rule6: flags[5],
        };
        let ratios = sieve_rules::RatioSet::from_array([40.0, 20.0, 20.0, 12.0, f64::INFINITY, 25.0]);
        ScreenedEntity {
            symbol: symbol.to_string(),
            name: Some(format!("{symbol} Corp")),
            sector: sector.to_string(),
            ratios,
            sector_mean: ratios,
            rules,
            score: sieve_rules::ScoreResult::from_outcome(&rules),
        }
    }

    pub(crate) fn sample_report() -> ScreenReport {
        ScreenReport {
            rows: vec![entity("GOOD", "Technology", 6), entity("MEH", "Energy", 3)],
            diagnostics: vec![
                Diagnostic::incomplete("HALF", &["equity"]),
                Diagnostic::from_error("GONE", &SieveError::fetch("GONE", "HTTP 404")),
            ],
            requested: 4,
            fetched: 3,
        }
    }

    #[test]
    fn test_table_lists_rows_and_diagnostics() {
        let table = format_table(&sample_report(), false);
        assert!(table.contains("Requested: 4  Fetched: 3  Scored: 2  Great: 1"));
        assert!(table.contains("GOOD"));
        assert!(table.contains("MEH"));
        assert!(table.contains("✓✓✓✓✓✓"));
        assert!(table.contains("✓✓✓✗✗✗"));
        assert!(table.contains("100.00"));
        assert!(table.contains("50.00"));
        assert!(table.contains("n/a"));
        assert!(table.contains("DIAGNOSTICS (2)"));
        assert!(table.contains("HALF [incomplete_fundamentals]: missing equity"));
        assert!(table.contains("GONE [fetch_failure]: HTTP 404"));
    }

    #[test]
    fn test_table_great_only_keeps_rank() {
        let mut report = sample_report();
        report.rows.swap(0, 1);
        let table = format_table(&report, true);
        assert!(!table.contains("MEH"));
        let line = table.lines().find(|l| l.contains("GOOD")).unwrap();
        assert!(line.trim_start().starts_with('2'));
    }

    #[test]
    fn test_table_empty_report() {
        let table = format_table(&ScreenReport::default(), false);
        assert!(table.contains("No scoreable entities."));
        assert!(!table.contains("DIAGNOSTICS"));
    }

    #[test]
    fn test_table_no_great_entities() {
        let mut report = sample_report();
        report.rows.remove(0);
        let table = format_table(&report, true);
        assert!(table.contains("No entities reached a greatness score of 80."));
    }

    #[test]
    fn test_chart_bars_scale_with_score() {
        let chart = format_chart(&sample_report(), 10);
        assert!(chart.contains("TOP 2 BY GREATNESS SCORE"));
        let good = chart.lines().find(|l| l.starts_with("GOOD")).unwrap();
        let meh = chart.lines().find(|l| l.starts_with("MEH")).unwrap();
        assert_eq!(good.matches('█').count(), CHART_WIDTH);
        assert_eq!(meh.matches('█').count(), CHART_WIDTH / 2);
    }

    #[test]
    fn test_chart_respects_top_n() {
        let chart = format_chart(&sample_report(), 1);
        assert!(chart.contains("TOP 1 BY GREATNESS SCORE"));
        assert!(!chart.contains("MEH"));
        assert!(format_chart(&ScreenReport::default(), 10).is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Energy", 10), "Energy");
        assert_eq!(truncate("Communication Services", 10), "Communica…");
    }
}
