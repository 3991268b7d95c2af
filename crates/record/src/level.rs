//! crates/record/src/level.rs
//! The severity scale of log records and its textual forms.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The variants are ordered from least to most severe, so the derived
/// [`Ord`] implementation can express rules such as "quiet output keeps
/// warnings and above".
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Diagnostic detail, gated by the debug level.
    Debug,
    /// Regular output, gated by the verbosity level when marked verbose.
    Info,
    /// Something worth the user's attention; survives quiet output.
    Warning,
    /// A failed operation; survives quiet output.
    Error,
    /// The run cannot continue; survives quiet output.
    Critical,
}

impl Level {
    /// Returns the lowercase label used when naming the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use record::Level;
    ///
    /// assert_eq!(Level::Debug.as_str(), "debug");
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Returns `true` for the levels a quiet run still prints.
    ///
    /// # Examples
    ///
    /// ```
    /// use record::Level;
    ///
    /// assert!(!Level::Info.survives_quiet());
    /// assert!(Level::Error.survives_quiet());
    /// ```
    #[must_use]
    pub const fn survives_quiet(self) -> bool {
        matches!(self, Self::Warning | Self::Error | Self::Critical)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_debug_to_critical() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn labels_round_trip_through_parsing() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ] {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn parsing_rejects_unknown_labels() {
        assert!("".parse::<Level>().is_err());
        assert!("Warning".parse::<Level>().is_err());
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn quiet_survival_splits_at_warning() {
        assert!(!Level::Debug.survives_quiet());
        assert!(!Level::Info.survives_quiet());
        assert!(Level::Warning.survives_quiet());
        assert!(Level::Error.survives_quiet());
        assert!(Level::Critical.survives_quiet());
    }
}
