//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Modules that log every request at debug level.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Build the filter: `RUST_LOG` if set, else `info` with noisy modules at `warn`.
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::new(directives);
    }

    let mut directives = String::from("info");
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }
    EnvFilter::new(directives)
}

/// Install the global subscriber. Logs go to stderr so report output on
/// stdout stays machine-readable; `RUST_LOG_FORMAT=json` switches to JSON lines.
pub(crate) fn init_logging() {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref());
    let json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        let _ = subscriber.with(fmt_layer).try_init();
    }
}
