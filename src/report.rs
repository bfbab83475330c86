//! Extraction of the grant report from the raw pipeline output.
//!
//! The generation backend conflates agent log output and the finished report
//! in a single text blob, demarcated by known sentinels. This module trims
//! the blob down to the markdown report body.

use crate::constants::{REPORT_BANNER_MARKER, REPORT_SAVED_MARKER};

/// Trims a raw pipeline blob down to the report body, in strict order:
///
/// 1. Everything up to and including the first `FINAL GRANT REPORT` banner is
///    log preamble and is discarded (no-op when the banner is absent).
/// 2. Everything from the first `[Success] Report saved to` status line
///    onward is trailing noise and is discarded (no-op when absent).
/// 3. Lines that are pure banner decoration (`#`, `=` and whitespace only)
///    are blanked. The line breaks stay so markdown paragraph structure
///    survives; the final trim removes the leftovers at either end.
pub fn clean_report(raw: &str) -> String {
    let text = match raw.split_once(REPORT_BANNER_MARKER) {
        Some((_, after)) => after,
        None => raw,
    };

    let text = match text.split_once(REPORT_SAVED_MARKER) {
        Some((before, _)) => before,
        None => text,
    };

    let lines: Vec<&str> = text
        .lines()
        .map(|line| if is_banner_line(line) { "" } else { line })
        .collect();

    lines.join("\n").trim().to_string()
}

/// A banner line is non-empty and made up solely of `#`, `=` and whitespace.
fn is_banner_line(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c == '#' || c == '=' || c.is_whitespace())
}
