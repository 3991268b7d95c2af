//! crates/logging/src/options.rs
//! Already-parsed verbosity options and the global debug override.

use std::env;

use thiserror::Error;

/// Environment variable overriding the debug level for a whole run.
///
/// A non-zero integer value wins over any `-d` count; zero or an unset
/// variable defers to the count. Anything else is a configuration error.
pub const DEBUG_ENV_VAR: &str = "TESTRIG_DEBUG";

/// Verbosity-related command line options, already counted by the parser.
///
/// `verbose` and `debug` are the number of `-v` and `-d` repetitions;
/// `None` and `Some(0)` both mean "leave the current threshold alone", so
/// options can be applied repeatedly as subcommands refine them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityOptions {
    /// Requested verbosity level, from repeated `-v`.
    pub verbose: Option<u8>,
    /// Requested debug level, from repeated `-d`.
    pub debug: Option<u8>,
    /// Suppress everything below warnings, except `print` output.
    pub quiet: bool,
}

/// Errors arising while interpreting verbosity options.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum OptionsError {
    /// The debug override variable held something other than a small
    /// unsigned integer.
    #[error("invalid TESTRIG_DEBUG value {value:?}: expected an unsigned integer")]
    InvalidDebugEnvVar {
        /// The offending value, lossily decoded for display.
        value: String,
    },
}

/// Reads the [`DEBUG_ENV_VAR`] override from the process environment.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn debug_level_from_env() -> Result<Option<u8>, OptionsError> {
    match env::var(DEBUG_ENV_VAR) {
        Ok(raw) => parse_debug_level(&raw).map(Some),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(OptionsError::InvalidDebugEnvVar {
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn parse_debug_level(raw: &str) -> Result<u8, OptionsError> {
    raw.parse()
        .map_err(|_| OptionsError::InvalidDebugEnvVar { value: raw.into() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_parse() {
        assert_eq!(parse_debug_level("0"), Ok(0));
        assert_eq!(parse_debug_level("2"), Ok(2));
        assert_eq!(parse_debug_level("255"), Ok(255));
    }

    #[test]
    fn junk_is_rejected_with_the_offending_value() {
        for raw in ["", "two", "-1", "2.5", "999"] {
            assert_eq!(
                parse_debug_level(raw),
                Err(OptionsError::InvalidDebugEnvVar { value: raw.into() }),
                "raw {raw:?}"
            );
        }
    }

    #[test]
    fn error_display_names_the_variable() {
        let error = OptionsError::InvalidDebugEnvVar {
            value: "two".into(),
        };

        assert_eq!(
            error.to_string(),
            "invalid TESTRIG_DEBUG value \"two\": expected an unsigned integer"
        );
    }

    #[test]
    fn options_default_to_leaving_thresholds_alone() {
        let options = VerbosityOptions::default();

        assert_eq!(options.verbose, None);
        assert_eq!(options.debug, None);
        assert!(!options.quiet);
    }
}
