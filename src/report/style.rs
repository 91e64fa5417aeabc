//! Color and symbol choices for report output.

use std::io::IsTerminal;

use colored::{Color, ColoredString, Colorize};

/// Status symbols with ASCII fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub success: &'static str,
    pub failure: &'static str,
    pub warning: &'static str,
    pub bullet: &'static str,
}

impl Symbols {
    /// Unicode symbols for capable terminals.
    pub const UNICODE: Self = Self {
        success: "✓",
        failure: "✗",
        warning: "⚠",
        bullet: "•",
    };

    /// ASCII symbols for pipes, files and dumb terminals.
    pub const ASCII: Self = Self {
        success: "[OK]",
        failure: "[FAIL]",
        warning: "[WARN]",
        bullet: "-",
    };
}

/// Formatting capability handed to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub symbols: Symbols,
    pub colors_enabled: bool,
}

impl Style {
    /// Create a style.
    #[must_use]
    pub const fn new(colors_enabled: bool, supports_unicode: bool) -> Self {
        Self {
            symbols: if supports_unicode {
                Symbols::UNICODE
            } else {
                Symbols::ASCII
            },
            colors_enabled,
        }
    }

    /// Uncolored ASCII output. Deterministic, used for tests and pipes.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false, false)
    }

    /// Pick colors and unicode when stdout is a terminal.
    ///
    /// The `colored` crate still honors `NO_COLOR` and `CLICOLOR` on top.
    #[must_use]
    pub fn detect() -> Self {
        let tty = std::io::stdout().is_terminal();
        Self::new(tty, tty)
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.colors_enabled {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply success styling to text.
    #[must_use]
    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Green)
    }

    /// Apply error styling to text.
    #[must_use]
    pub fn error(&self, text: &str) -> ColoredString {
        let styled = self.paint(text, Color::Red);
        if self.colors_enabled {
            styled.bold()
        } else {
            styled
        }
    }

    /// Apply warning styling to text.
    #[must_use]
    pub fn warning(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Yellow)
    }

    /// Apply heading styling to text.
    #[must_use]
    pub fn heading(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Blue)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}
