//! crates/logging/src/filter.rs
//! Pure record predicates deciding what reaches a sink.

use record::{Gate, Level, LogRecord};

/// A stateless predicate over log records.
///
/// Implementations take `&self` and keep no interior state; the verdict
/// depends only on the record, so re-evaluation is idempotent and a
/// chain's verdict does not depend on the order its filters run in.
pub trait RecordFilter: Send + Sync {
    /// Returns `true` when `record` may proceed to the sink.
    fn allows(&self, record: &LogRecord) -> bool;
}

/// Suppresses verbose records above the logger's verbosity level.
///
/// Only [`Level::Info`] records carrying [`Gate::Verbosity`] are examined;
/// everything else passes. A gated record passes when the logger's level
/// at emission time reached the level the message asked for.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerbosityLevelFilter;

impl RecordFilter for VerbosityLevelFilter {
    fn allows(&self, record: &LogRecord) -> bool {
        if record.level != Level::Info {
            return true;
        }

        match record.details.gate {
            Gate::Verbosity {
                logger_level,
                message_level,
            } => logger_level >= message_level,
            Gate::None | Gate::Debug { .. } => true,
        }
    }
}

/// Suppresses debug records above the logger's debug level.
///
/// The mirror image of [`VerbosityLevelFilter`], keyed on [`Level::Debug`]
/// records carrying [`Gate::Debug`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugLevelFilter;

impl RecordFilter for DebugLevelFilter {
    fn allows(&self, record: &LogRecord) -> bool {
        if record.level != Level::Debug {
            return true;
        }

        match record.details.gate {
            Gate::Debug {
                logger_level,
                message_level,
            } => logger_level >= message_level,
            Gate::None | Gate::Verbosity { .. } => true,
        }
    }
}

/// Suppresses everything below [`Level::Warning`] on quiet runs.
///
/// Records emitted through `print` carry an exemption flag and pass
/// regardless of their level. The filter itself is unconditional; whether
/// it participates in a chain at all is decided where the chain is built,
/// see [`standard_filters`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QuietnessFilter;

impl RecordFilter for QuietnessFilter {
    fn allows(&self, record: &LogRecord) -> bool {
        record.level.survives_quiet() || record.details.ignore_quietness
    }
}

/// Returns the canonical console filter chain.
///
/// Verbosity and debug gating always apply; the quietness filter joins the
/// chain only when `quiet` output was requested.
#[must_use]
pub fn standard_filters(quiet: bool) -> Vec<Box<dyn RecordFilter>> {
    let mut filters: Vec<Box<dyn RecordFilter>> =
        vec![Box::new(VerbosityLevelFilter), Box::new(DebugLevelFilter)];

    if quiet {
        filters.push(Box::new(QuietnessFilter));
    }

    filters
}
