//! Per-entity diagnostics collected during a run.

use serde::{Deserialize, Serialize};
use sieve_traits::{SieveError, Symbol};
use std::fmt;

/// Why an entity is missing from the ranked output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The provider could not deliver a snapshot.
    FetchFailure,
    /// The snapshot lacked a field required for scoring.
    IncompleteFundamentals,
}

impl DiagnosticKind {
    /// Stable label for display and export.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFailure => "fetch_failure",
            Self::IncompleteFundamentals => "incomplete_fundamentals",
        }
    }
}

/// A non-fatal problem with one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Affected symbol.
    pub symbol: Symbol,
    /// Kind of problem.
    pub kind: DiagnosticKind,
    /// Human-readable reason.
    pub reason: String,
}

impl Diagnostic {
    /// Diagnostic for a per-entity error.
    ///
    /// [`SieveError::IncompleteFundamentals`] maps to
    /// [`DiagnosticKind::IncompleteFundamentals`]; any other error means the
    /// snapshot never arrived and maps to [`DiagnosticKind::FetchFailure`].
    #[must_use]
    pub fn from_error(symbol: impl Into<Symbol>, error: &SieveError) -> Self {
        let (kind, reason) = match error {
            SieveError::IncompleteFundamentals { missing, .. } => (
                DiagnosticKind::IncompleteFundamentals,
                format!("missing {}", missing.join(", ")),
            ),
            SieveError::FetchFailure { reason, .. } => {
                (DiagnosticKind::FetchFailure, reason.clone())
            }
            other => (DiagnosticKind::FetchFailure, other.to_string()),
        };
        Self {
            symbol: symbol.into(),
            kind,
            reason,
        }
    }

    /// Diagnostic for a record excluded for missing fields.
    #[must_use]
    pub fn incomplete(symbol: impl Into<Symbol>, missing: &[&'static str]) -> Self {
        let symbol = symbol.into();
        let error = SieveError::IncompleteFundamentals {
            symbol: symbol.clone(),
            missing: missing.to_vec(),
        };
        Self::from_error(symbol, &error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.symbol, self.kind.as_str(), self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_keeps_provider_reason() {
        let err = SieveError::fetch("AAPL", "HTTP 503");
        let diag = Diagnostic::from_error("AAPL", &err);
        assert_eq!(diag.kind, DiagnosticKind::FetchFailure);
        assert_eq!(diag.reason, "HTTP 503");
    }

    #[test]
    fn test_fetch_failure_from_other_error() {
        let err = SieveError::Other("socket closed".to_string());
        let diag = Diagnostic::from_error("AAPL", &err);
        assert_eq!(diag.kind, DiagnosticKind::FetchFailure);
        assert_eq!(diag.reason, "Error: socket closed");
    }

    #[test]
    fn test_incomplete_display() {
        let diag = Diagnostic::incomplete("MSFT", &["equity", "ebitda"]);
        assert_eq!(
            diag.to_string(),
            "MSFT [incomplete_fundamentals]: missing equity, ebitda"
        );
    }

    #[test]
    fn test_incomplete_error_maps_to_incomplete_kind() {
        let err = SieveError::IncompleteFundamentals {
            symbol: "MSFT".to_string(),
            missing: vec!["revenue"],
        };
        let diag = Diagnostic::from_error("MSFT", &err);
        assert_eq!(diag.kind, DiagnosticKind::IncompleteFundamentals);
        assert_eq!(diag.reason, "missing revenue");
        assert_eq!(diag, Diagnostic::incomplete("MSFT", &["revenue"]));
    }
}
