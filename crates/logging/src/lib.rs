#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is testrig's output pipeline: a tree of [`Logger`] values
//! carrying verbosity state and context labels, a set of pure record
//! filters, and the sinks records end up in. Every user-visible line the
//! tool prints flows through this crate.
//!
//! # Design
//!
//! A [`Logger`] is a plain value. The root is constructed explicitly, via
//! [`Logger::create`] or [`Logger::with_sink`], and handed down; nested
//! work calls [`Logger::descend`] to get an independent child whose output
//! is indented one unit further. Emission methods annotate the caller's
//! [`Detail`](record::Detail) with the logger's labels, shift and threshold
//! levels, render the final message once, and pass the [`LogRecord`] to the
//! shared sink.
//!
//! Suppression lives entirely in the sink layer. [`FilteredSink`] wraps any
//! inner [`Sink`] with a list of [`RecordFilter`] predicates and forwards a
//! record only when every filter passes. The filters themselves are
//! stateless; which ones participate is decided when the chain is built,
//! see [`standard_filters`].
//!
//! # Invariants
//!
//! - Emission never fails the caller: no emission method returns a result
//!   and sinks swallow write errors.
//! - [`Logger::descend`] never mutates the parent; concurrent descent from
//!   a shared logger is race-free.
//! - Filters are pure predicates, so a chain's verdict does not depend on
//!   filter order.
//!
//! # Errors
//!
//! The only fallible surface is option handling:
//! [`Logger::apply_verbosity_options`] reports an unparsable
//! `TESTRIG_DEBUG` environment value as an [`OptionsError`].
//!
//! # Examples
//!
//! Capture records in memory and inspect what survives the filters:
//!
//! ```
//! use std::sync::Arc;
//!
//! use logging::{FilteredSink, Logger, MemorySink};
//!
//! let capture = Arc::new(MemorySink::new());
//! let sink = FilteredSink::with_standard_filters(capture.clone(), false);
//!
//! let mut logger = Logger::with_sink(Arc::new(sink));
//! logger.add_label("smoke");
//!
//! logger.info("plan loaded");
//! logger.verbose("step definitions resolved");
//!
//! // Verbosity defaults to 0, so the verbose record was filtered out.
//! assert_eq!(capture.messages(), vec!["[smoke] plan loaded".to_owned()]);
//! ```
//!
//! # See also
//!
//! - The `record` crate for the level, detail and rendering vocabulary;
//!   its types are re-exported here for convenience.

mod filter;
mod logger;
mod options;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use filter::{
    DebugLevelFilter, QuietnessFilter, RecordFilter, VerbosityLevelFilter, standard_filters,
};
pub use logger::{DEFAULT_DEBUG_LEVEL, DEFAULT_VERBOSITY_LEVEL, Logger};
pub use options::{DEBUG_ENV_VAR, OptionsError, VerbosityOptions};
pub use record::{Color, ColorMode, Detail, Details, Gate, Level, LogRecord};
pub use sink::{ConsoleSink, FilteredSink, MemorySink, Sink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
