//! crates/record/src/detail.rs
//! Call-site details, their gating information and the annotated form.

use crate::style::Color;

/// How a record participates in threshold filtering.
///
/// Each emission method contributes exactly one variant, so a record can
/// never be gated by verbosity and debug levels at the same time. Filters
/// match on the variant they own and pass everything else, which makes the
/// "no gating information present" case an explicit arm instead of a
/// missing attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gate {
    /// The record is not threshold-gated.
    None,
    /// The record competes against the logger's verbosity level.
    Verbosity {
        /// Verbosity level of the emitting logger at emission time.
        logger_level: u8,
        /// Verbosity level the message asks for.
        message_level: u8,
    },
    /// The record competes against the logger's debug level.
    Debug {
        /// Debug level of the emitting logger at emission time.
        logger_level: u8,
        /// Debug level the message asks for.
        message_level: u8,
    },
}

/// What a call site contributes to a log record.
///
/// A `Detail` is built with the `with_*` methods and handed to one of the
/// logger's emission methods; plain strings convert via [`From`], so
/// `logger.info("ready")` and
/// `logger.info(Detail::new("step").with_value("discover"))` both work.
///
/// # Examples
///
/// ```
/// use record::{Color, Detail};
///
/// let detail = Detail::new("environment")
///     .with_value("PATH=/usr/bin")
///     .with_color(Color::Green)
///     .with_shift(1);
///
/// assert_eq!(detail.key(), "environment");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Detail {
    key: String,
    value: Option<String>,
    color: Option<Color>,
    shift: usize,
}

impl Detail {
    /// Creates a detail carrying only `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            color: None,
            shift: 0,
        }
    }

    /// Attaches a value, rendered as `{key}: {value}`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Asks for the key to be rendered in `color`.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Indents the rendered message by `shift` extra units.
    #[must_use]
    pub fn with_shift(mut self, shift: usize) -> Self {
        self.shift = shift;
        self
    }

    /// Returns the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Combines this detail with the ambient state a logger contributes.
    ///
    /// The logger's accumulated `base_shift` is added to the detail's own
    /// shift; `labels` is the logger's label snapshot at emission time.
    #[must_use]
    pub fn annotate(
        self,
        labels: Vec<String>,
        gate: Gate,
        ignore_quietness: bool,
        base_shift: usize,
    ) -> Details {
        Details {
            key: self.key,
            value: self.value,
            color: self.color,
            shift: self.shift + base_shift,
            labels,
            gate,
            ignore_quietness,
        }
    }
}

impl From<&str> for Detail {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Detail {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// The fully annotated companion data of a log record.
///
/// Everything filters and sinks may want to inspect travels here: the call
/// site's key/value/color, the total indentation shift, the emitting
/// logger's label snapshot, the threshold [`Gate`] and the quietness
/// exemption.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Details {
    /// Key of the message, or the whole message when no value is present.
    pub key: String,
    /// Optional value rendered to the right of the key.
    pub value: Option<String>,
    /// Optional color applied to the key.
    pub color: Option<Color>,
    /// Total indentation, in units, applied when rendering.
    pub shift: usize,
    /// Labels of the emitting logger, outermost first.
    pub labels: Vec<String>,
    /// Threshold gating attached by the emission method.
    pub gate: Gate,
    /// Set by `print`-style emissions that bypass quiet output.
    pub ignore_quietness: bool,
}
