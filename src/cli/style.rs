//! Terminal styling helpers
//!
//! Styles always emit ANSI codes; printing through `anstream` strips them
//! when the stream is not a color-capable terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Success marker
pub const CHECK: &str = "✓";

/// Pointer used before step descriptions
pub const ARROW: &str = "→";

/// Semantic styles for terminal output
pub trait Stylize {
    /// Bold text for headings and names
    fn emphasis(&self) -> String;
    /// Dimmed secondary text
    fn muted(&self) -> String;
    /// Highlighted values such as numbers and branches
    fn accent(&self) -> String;
    /// Green success text
    fn success(&self) -> String;
    /// Yellow warning text
    fn warn(&self) -> String;
    /// Red error text
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Dimmed arrow
pub fn arrow() -> String {
    ARROW.muted()
}

/// Style for the listing spinner
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
