//! Presentation seam for ranked reports.

use crate::ScreenReport;
use sieve_traits::Result;
use std::path::Path;

/// Renders a [`ScreenReport`] for a human or another program.
///
/// The screening engine never formats its own output; a binary supplies a
/// presenter (terminal, GUI, notebook) and decides which of these to call.
pub trait Presenter {
    /// Render the full ranked table, diagnostics included.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink fails.
    fn render_table(&self, report: &ScreenReport) -> Result<()>;

    /// Chart the greatness scores of the `top_n` highest-ranked rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink fails.
    fn render_chart(&self, report: &ScreenReport, top_n: usize) -> Result<()>;

    /// Write the ranked rows to `path` as delimited text.
    ///
    /// # Errors
    ///
    /// Returns [`sieve_traits::SieveError::Export`] or an I/O error if the
    /// file cannot be written.
    fn export(&self, report: &ScreenReport, path: &Path) -> Result<()>;
}
