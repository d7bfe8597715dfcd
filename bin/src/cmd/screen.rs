//! Screen command implementation.

use crate::{OutputFormat, presenter::TerminalPresenter};
use anyhow::{Result, bail};
use chrono::Local;
use sieve_fmp::FmpClient;
use sieve_screen::{Presenter, ScreenConfig, ScreenReport, Screener};
use sieve_traits::{Symbol, UniverseProvider};
use std::{borrow::Cow, path::PathBuf, time::Duration};
use tracing::info;

/// Arguments of `sieve screen`.
#[derive(Debug)]
pub(crate) struct ScreenOptions {
    pub(crate) symbols: Vec<String>,
    pub(crate) sp500: bool,
    pub(crate) sample: Option<usize>,
    pub(crate) batch_size: usize,
    pub(crate) top: usize,
    pub(crate) great_only: bool,
    pub(crate) export: Option<PathBuf>,
    pub(crate) format: OutputFormat,
    pub(crate) timeout: u64,
}

impl ScreenOptions {
    const fn config(&self) -> ScreenConfig {
        ScreenConfig {
            batch_size: self.batch_size,
            request_timeout_secs: self.timeout,
        }
    }
}

/// Fetch, screen and present the requested symbols.
pub(crate) async fn run_screen(options: ScreenOptions) -> Result<()> {
    let screener = Screener::new(options.config())?;
    let client = FmpClient::from_env()?
        .with_timeout(Duration::from_secs(screener.config().request_timeout_secs))?;

    let symbols = resolve_symbols(&client, &options.symbols, options.sp500, options.sample).await?;
    if symbols.is_empty() {
        bail!("No symbols to screen. Pass tickers or use --sp500.");
    }

    let report = screener.run(&client, &symbols).await;
    let selected = selected_rows(&report, options.great_only);
    let presenter = TerminalPresenter::new(options.great_only);

    match options.format {
        OutputFormat::Text => {
            println!("As of {}", Local::now().format("%Y-%m-%d %H:%M"));
            // the table filters itself so great rows keep their overall rank
            presenter.render_table(&report)?;
            presenter.render_chart(&selected, options.top)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&*selected)?);
        }
    }

    if let Some(path) = &options.export {
        presenter.export(&selected, path)?;
        info!(path = %path.display(), rows = selected.rows.len(), "Exported report");
    }

    Ok(())
}

/// The report restricted to great rows when `great_only` is set.
fn selected_rows(report: &ScreenReport, great_only: bool) -> Cow<'_, ScreenReport> {
    if !great_only {
        return Cow::Borrowed(report);
    }
    Cow::Owned(ScreenReport {
        rows: report.great().cloned().collect(),
        diagnostics: report.diagnostics.clone(),
        requested: report.requested,
        fetched: report.fetched,
    })
}

/// Explicit tickers (upper-cased) followed by the index universe when
/// requested, truncated to the first `sample` symbols.
async fn resolve_symbols<U>(
    universe: &U,
    symbols: &[String],
    sp500: bool,
    sample: Option<usize>,
) -> Result<Vec<Symbol>>
where
    U: UniverseProvider + ?Sized,
{
    let mut resolved: Vec<Symbol> = symbols
        .iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    if sp500 {
        let constituents = universe.universe().await?;
        info!(constituents = constituents.len(), "Loaded S&P 500 universe");
        resolved.extend(constituents.into_iter().map(|c| c.symbol));
    }

    if let Some(n) = sample {
        resolved.truncate(n);
    }
    Ok(resolved)
}
