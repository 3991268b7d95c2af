//! crates/logging/src/logger.rs
//! The logger tree: verbosity state, context labels and emission methods.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use record::{Color, ColorMode, Detail, Gate, Level, LogRecord, render};

use crate::options::{OptionsError, VerbosityOptions, debug_level_from_env};
use crate::sink::{ConsoleSink, FilteredSink, Sink};

/// Verbosity level a fresh logger starts with.
pub const DEFAULT_VERBOSITY_LEVEL: u8 = 0;

/// Debug level a fresh logger starts with.
pub const DEFAULT_DEBUG_LEVEL: u8 = 0;

const ROOT_LOGGER_NAME: &str = "testrig";

/// A node in the logging hierarchy.
///
/// A logger bundles the state every emission needs: the verbosity and
/// debug thresholds, the context labels rendered in front of each message,
/// the accumulated indentation shift and the shared [`Sink`]. Emission
/// methods take `&self` and never fail; state changes take `&mut self` and
/// therefore happen before a logger is shared.
///
/// Child loggers come from [`descend`](Self::descend): an independent copy
/// with one extra unit of indentation, sharing the parent's sink. Nothing
/// points back at the parent and the parent is never mutated, so any
/// number of callers can descend from a shared logger concurrently.
pub struct Logger {
    name: String,
    labels: Vec<String>,
    verbosity_level: u8,
    debug_level: u8,
    shift: usize,
    colors: ColorMode,
    sink: Arc<dyn Sink>,
    child_ids: AtomicUsize,
}

impl Logger {
    /// Creates the root logger over a filtered stderr sink.
    ///
    /// This is meant for process bootstrap and for tests that just need a
    /// working logger; embedders wanting their own destination use
    /// [`with_sink`](Self::with_sink) instead.
    #[must_use]
    pub fn create() -> Self {
        let console = Arc::new(ConsoleSink::stderr());
        Self::with_sink(Arc::new(FilteredSink::with_standard_filters(
            console, false,
        )))
    }

    /// Creates the root logger and applies `options` in one step.
    ///
    /// Quietness is consumed here, when the filter chain is built; the
    /// `-v`/`-d` counts go through
    /// [`apply_verbosity_options`](Self::apply_verbosity_options).
    pub fn create_with_options(options: &VerbosityOptions) -> Result<Self, OptionsError> {
        let console = Arc::new(ConsoleSink::stderr());
        let mut logger = Self::with_sink(Arc::new(FilteredSink::with_standard_filters(
            console,
            options.quiet,
        )));
        logger.apply_verbosity_options(options)?;

        Ok(logger)
    }

    /// Creates a root logger emitting into `sink`.
    ///
    /// The sink is used as passed in, never copied, so callers keeping
    /// their own handle observe every record this logger and its
    /// descendants emit.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_owned(),
            labels: Vec::new(),
            verbosity_level: DEFAULT_VERBOSITY_LEVEL,
            debug_level: DEFAULT_DEBUG_LEVEL,
            shift: 0,
            colors: ColorMode::Plain,
            sink,
            child_ids: AtomicUsize::new(0),
        }
    }

    /// Selects how styled substrings are rendered.
    #[must_use]
    pub fn with_colors(mut self, colors: ColorMode) -> Self {
        self.colors = colors;
        self
    }

    /// Appends a context label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Sets the verbosity threshold.
    #[must_use]
    pub fn with_verbosity_level(mut self, level: u8) -> Self {
        self.verbosity_level = level;
        self
    }

    /// Sets the debug threshold.
    #[must_use]
    pub fn with_debug_level(mut self, level: u8) -> Self {
        self.debug_level = level;
        self
    }

    /// Appends a context label; affects every subsequent emission.
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Returns the diagnostic name of this logger.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the context labels, outermost first.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the verbosity threshold.
    #[must_use]
    pub const fn verbosity_level(&self) -> u8 {
        self.verbosity_level
    }

    /// Returns the debug threshold.
    #[must_use]
    pub const fn debug_level(&self) -> u8 {
        self.debug_level
    }

    /// Returns the accumulated indentation shift, in units.
    #[must_use]
    pub const fn shift(&self) -> usize {
        self.shift
    }

    /// Returns the color mode messages are rendered with.
    #[must_use]
    pub const fn colors(&self) -> ColorMode {
        self.colors
    }

    /// Returns a handle to the sink records are emitted into.
    #[must_use]
    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::clone(&self.sink)
    }

    /// Creates a child logger indented one unit deeper.
    ///
    /// The child copies this logger's labels, thresholds and color mode,
    /// shares its sink, and gets an auto-generated name. The parent is not
    /// touched.
    #[must_use]
    pub fn descend(&self) -> Self {
        self.descend_with(None, 1)
    }

    /// Creates a child logger with a chosen name suffix.
    #[must_use]
    pub fn descend_named(&self, name: &str) -> Self {
        self.descend_with(Some(name), 1)
    }

    /// Creates a child logger, controlling name and extra indentation.
    ///
    /// `extra_shift` of zero yields a sibling-like child: same indentation,
    /// separate identity.
    #[must_use]
    pub fn descend_with(&self, name: Option<&str>, extra_shift: usize) -> Self {
        let name = match name {
            Some(name) => format!("{}.{name}", self.name),
            None => {
                let id = self.child_ids.fetch_add(1, Ordering::Relaxed);
                format!("{}.{id}", self.name)
            }
        };

        Self {
            name,
            labels: self.labels.clone(),
            verbosity_level: self.verbosity_level,
            debug_level: self.debug_level,
            shift: self.shift + extra_shift,
            colors: self.colors,
            sink: Arc::clone(&self.sink),
            child_ids: AtomicUsize::new(0),
        }
    }

    /// Updates the thresholds from already-parsed command line options.
    ///
    /// A missing or zero count leaves the corresponding threshold alone,
    /// so options can be applied repeatedly as subcommands refine them. A
    /// non-zero `TESTRIG_DEBUG` environment value wins over the `-d`
    /// count. Quietness is not handled here; it selects the filter chain
    /// when the sink is built.
    pub fn apply_verbosity_options(
        &mut self,
        options: &VerbosityOptions,
    ) -> Result<(), OptionsError> {
        if let Some(level) = options.verbose.filter(|level| *level > 0) {
            self.verbosity_level = level;
        }

        let debug = match debug_level_from_env()? {
            Some(level) if level > 0 => Some(level),
            _ => options.debug,
        };
        if let Some(level) = debug.filter(|level| *level > 0) {
            self.debug_level = level;
        }

        Ok(())
    }

    /// Emits an informational message that bypasses quiet output.
    pub fn print(&self, detail: impl Into<Detail>) {
        self.emit(Level::Info, detail.into(), Gate::None, true);
    }

    /// Emits an informational message.
    pub fn info(&self, detail: impl Into<Detail>) {
        self.emit(Level::Info, detail.into(), Gate::None, false);
    }

    /// Emits a level-1 verbose message.
    pub fn verbose(&self, detail: impl Into<Detail>) {
        self.verbose_at(1, detail);
    }

    /// Emits a verbose message shown once verbosity reaches `level`.
    pub fn verbose_at(&self, level: u8, detail: impl Into<Detail>) {
        let gate = Gate::Verbosity {
            logger_level: self.verbosity_level,
            message_level: level,
        };
        self.emit(Level::Info, detail.into(), gate, false);
    }

    /// Emits a level-1 debug message.
    pub fn debug(&self, detail: impl Into<Detail>) {
        self.debug_at(1, detail);
    }

    /// Emits a debug message shown once the debug level reaches `level`.
    pub fn debug_at(&self, level: u8, detail: impl Into<Detail>) {
        let gate = Gate::Debug {
            logger_level: self.debug_level,
            message_level: level,
        };
        self.emit(Level::Debug, detail.into(), gate, false);
    }

    /// Emits a warning, rendered as `warn: {message}` with a yellow marker.
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(
            Level::Warning,
            Detail::new("warn")
                .with_value(message)
                .with_color(Color::Yellow),
            Gate::None,
            false,
        );
    }

    /// Emits a failure, rendered as `fail: {message}` with a red marker.
    pub fn fail(&self, message: impl Into<String>) {
        self.emit(
            Level::Error,
            Detail::new("fail")
                .with_value(message)
                .with_color(Color::Red),
            Gate::None,
            false,
        );
    }

    fn emit(&self, level: Level, detail: Detail, gate: Gate, ignore_quietness: bool) {
        let details = detail.annotate(self.labels.clone(), gate, ignore_quietness, self.shift);
        let message = render::line(&details, self.colors);

        self.sink.emit(LogRecord::new(message, level, details));
    }
}

impl Clone for Logger {
    /// Clones the logger into a sibling with identical settings.
    ///
    /// The two loggers share the sink but nothing else; changing labels or
    /// thresholds on one never affects the other.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            labels: self.labels.clone(),
            verbosity_level: self.verbosity_level,
            debug_level: self.debug_level,
            shift: self.shift,
            colors: self.colors,
            sink: Arc::clone(&self.sink),
            child_ids: AtomicUsize::new(0),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("labels", &self.labels)
            .field("verbosity_level", &self.verbosity_level)
            .field("debug_level", &self.debug_level)
            .field("shift", &self.shift)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
