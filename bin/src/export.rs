//! CSV export of ranked reports through a polars `DataFrame`.

use polars::prelude::*;
use sieve_screen::ScreenReport;
use sieve_traits::SieveError;
use std::{fs::File, path::Path};

/// Build one row per ranked entity, in rank order.
pub(crate) fn report_frame(report: &ScreenReport) -> PolarsResult<DataFrame> {
    let rows = &report.rows;
    let ratio = |f: fn(&sieve_rules::RatioSet) -> f64| -> Vec<f64> {
        rows.iter().map(|r| f(&r.ratios)).collect()
    };
    let rule = |i: usize| -> Vec<bool> { rows.iter().map(|r| r.rules.as_array()[i]).collect() };

    df! {
        "rank" => (1..=rows.len() as u64).collect::<Vec<u64>>(),
        "symbol" => rows.iter().map(|r| r.symbol.as_str()).collect::<Vec<&str>>(),
        "name" => rows.iter().map(|r| r.name.as_deref()).collect::<Vec<Option<&str>>>(),
        "sector" => rows.iter().map(|r| r.sector.as_str()).collect::<Vec<&str>>(),
        "gross_margin_pct" => ratio(|r| r.gross_margin_pct),
        "ebitda_margin_pct" => ratio(|r| r.ebitda_margin_pct),
        "roe_pct" => ratio(|r| r.roe_pct),
        "pe_ratio" => ratio(|r| r.pe_ratio),
        "ev_ebitda_ratio" => ratio(|r| r.ev_ebitda_ratio),
        "debt_to_equity_pct" => ratio(|r| r.debt_to_equity_pct),
        "rule1" => rule(0),
        "rule2" => rule(1),
        "rule3" => rule(2),
        "rule4" => rule(3),
        "rule5" => rule(4),
        "rule6" => rule(5),
        "rules_passed" => rows.iter().map(|r| u32::from(r.rules.passed_count())).collect::<Vec<u32>>(),
        "greatness_score" => rows.iter().map(|r| r.score.display_score()).collect::<Vec<f64>>(),
        "is_great" => rows.iter().map(|r| r.score.is_great).collect::<Vec<bool>>(),
    }
}

/// Write the ranked rows of `report` to `path` with a header line.
pub(crate) fn write_csv(report: &ScreenReport, path: &Path) -> sieve_traits::Result<()> {
    let mut df = report_frame(report).map_err(|e| SieveError::Export(e.to_string()))?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| SieveError::Export(format!("{}: {e}", path.display())))?;
    Ok(())
}
