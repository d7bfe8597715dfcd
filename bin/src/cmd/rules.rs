//! Rules command implementation.

use sieve_rules::{GREATNESS_THRESHOLD, Rule};
use std::fmt::Write as _;

/// Print the six screening rules.
pub(crate) fn list_rules() {
    print!("{}", format_rules());
}

fn format_rules() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║                      Screening Rules                         ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n");

    for rule in Rule::ALL {
        let _ = writeln!(out, "  {:<6} {}", rule.name(), rule.description());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Sector means are taken over the scoreable symbols of the same run.");
    let _ = writeln!(
        out,
        "Greatness score = 100 x rules passed / {}; great at >= {GREATNESS_THRESHOLD:.0}.",
        Rule::ALL.len()
    );
    let _ = writeln!(out);
    out
}
