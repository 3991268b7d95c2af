//! crates/record/src/style.rs
//! Semantic colors and the rendering mode that applies them.

use std::fmt;
use std::str::FromStr;

use anstyle::{AnsiColor, Style};

/// Semantic colors a record may ask for.
///
/// The pipeline assigns fixed meanings to three of them: context labels
/// render cyan, `warn` markers yellow and `fail` markers red. The rest are
/// available to call sites coloring their own keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Used for context labels.
    Cyan,
    /// Used for warning markers.
    Yellow,
    /// Used for failure markers.
    Red,
    /// Free for call sites.
    Green,
    /// Free for call sites.
    Blue,
    /// Free for call sites.
    Magenta,
}

impl Color {
    /// Returns the lowercase label naming the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }

    /// Returns the foreground [`Style`] rendering this color.
    #[must_use]
    pub const fn style(self) -> Style {
        let ansi = match self {
            Self::Cyan => AnsiColor::Cyan,
            Self::Yellow => AnsiColor::Yellow,
            Self::Red => AnsiColor::Red,
            Self::Green => AnsiColor::Green,
            Self::Blue => AnsiColor::Blue,
            Self::Magenta => AnsiColor::Magenta,
        };

        Style::new().fg_color(Some(anstyle::Color::Ansi(ansi)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Color`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError {
    _private: (),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised color name")
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "cyan" => Ok(Self::Cyan),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            _ => Err(ParseColorError { _private: () }),
        }
    }
}

/// Controls whether rendered messages carry ANSI escape sequences.
///
/// The mode is decided once, before rendering; the stored message is final
/// and no later stage strips or re-applies styling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// Emit the literal text.
    #[default]
    Plain,
    /// Wrap styled substrings in ANSI escape sequences.
    Ansi,
}

impl ColorMode {
    /// Renders `text` in `color` according to the mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use record::{Color, ColorMode};
    ///
    /// assert_eq!(ColorMode::Plain.paint(Color::Cyan, "[smoke]"), "[smoke]");
    /// assert!(ColorMode::Ansi.paint(Color::Cyan, "[smoke]").contains("\u{1b}["));
    /// ```
    #[must_use]
    pub fn paint(self, color: Color, text: &str) -> String {
        match self {
            Self::Plain => text.to_owned(),
            Self::Ansi => {
                let style = color.style();
                format!("{}{text}{}", style.render(), style.render_reset())
            }
        }
    }

    /// Returns `true` when the mode emits ANSI escape sequences.
    #[must_use]
    pub const fn is_ansi(self) -> bool {
        matches!(self, Self::Ansi)
    }
}

impl From<bool> for ColorMode {
    /// Maps a "colors wanted" flag to a mode, such as the result of
    /// terminal detection.
    fn from(colored: bool) -> Self {
        if colored { Self::Ansi } else { Self::Plain }
    }
}
