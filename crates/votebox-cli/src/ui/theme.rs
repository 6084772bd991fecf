//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};
use votebox_core::view::Podium;

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Symbols used by the renderers.
pub mod symbols {
    use super::SymbolPair;

    pub const VOTED: SymbolPair = SymbolPair::new("x", "\u{2713}"); // ✓
    pub const NOT_VOTED: SymbolPair = SymbolPair::new("-", "\u{00B7}"); // ·
    pub const BAR_FULL: SymbolPair = SymbolPair::new("#", "\u{2588}"); // █
    pub const BAR_EMPTY: SymbolPair = SymbolPair::new(".", "\u{2591}"); // ░
    pub const SEPARATOR: SymbolPair = SymbolPair::new("-", "\u{00B7}");
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        let pair = match self {
            Self::Ok => SymbolPair::new("[OK]", "[\u{2713}]"),
            Self::Warn => SymbolPair::new("[WARN]", "[\u{26A0}]"),
            Self::Err => SymbolPair::new("[ERR]", "[\u{2717}]"),
            Self::Info => SymbolPair::new("[INFO]", "[\u{2139}]"),
        };
        pair.get(unicode)
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Err => Style::new().red(),
            Self::Info => Style::new().cyan(),
        }
    }
}

/// Rank marker for the top three results.
pub fn podium_marker(podium: Podium, unicode: bool) -> &'static str {
    let pair = match podium {
        Podium::Gold => SymbolPair::new("#1", "\u{1F947}"),
        Podium::Silver => SymbolPair::new("#2", "\u{1F948}"),
        Podium::Bronze => SymbolPair::new("#3", "\u{1F949}"),
    };
    pair.get(unicode)
}

/// Named styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn accent() -> Style {
        Style::new().green().bold()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
