//! Styled stderr helpers for CLI status lines.
//!
//! The comparison report itself goes to stdout unstyled; these are for
//! operator-facing diagnostics around it.

use console::style;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}
