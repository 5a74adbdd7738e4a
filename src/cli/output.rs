//! Shared CLI output helpers.
//!
//! Everything here goes to stderr: stdout belongs to workflow commands and
//! to the machine-readable output of `resolve`.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints
//! - Dimmed: secondary info

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Print an error message (red).
///
/// Example: `✗ secret not found: foobarbaz`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ set INPUT_SECRETS or pass --secrets`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(msg).dim());
    } else {
        eprintln!("{}", msg);
    }
}
