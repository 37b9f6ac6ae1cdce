//! `--verbose` status lines.
//!
//! One line per index event, with the label right-aligned in a fixed gutter
//! so the paths after it line up:
//!
//! ```text
//!     Scanning release.idx
//!      Skipped prerelease.idx
//! ```
//!
//! Everything goes to stderr; stdout carries only matches and unresolved
//! packages.

use std::io::{self, Write};

use console::Style;

/// Width of the label gutter.
pub const LABEL_WIDTH: usize = 12;

/// An index is being scanned.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// End-of-run summary.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// An index was passed over.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}

/// Write one status line to `out`. A closed stderr is not worth failing a
/// resolution over, so callers above ignore the result.
pub fn write_status<W: Write>(
    out: &mut W,
    style: &Style,
    label: &str,
    message: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>width$} {message}",
        style.apply_to(label),
        width = LABEL_WIDTH
    )
}

fn emit(style: Style, label: &str, message: &str) {
    let _ = write_status(&mut io::stderr().lock(), &style, label, message);
}
