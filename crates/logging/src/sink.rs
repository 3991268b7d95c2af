//! crates/logging/src/sink.rs
//! Destinations for rendered records and the filtering wrapper.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use record::LogRecord;

use crate::filter::{RecordFilter, standard_filters};

/// A destination for log records.
///
/// Sinks take shared references and must be safe to call from concurrent
/// loggers; the provided implementations serialise access with a mutex.
/// Emission is infallible by contract: a sink that cannot deliver a record
/// drops it rather than surfacing an error to the logging call site.
pub trait Sink: Send + Sync {
    /// Delivers one record.
    fn emit(&self, record: LogRecord);
}

/// Writes rendered messages, one per line, to an [`io::Write`] implementor.
///
/// Write and flush errors are ignored; a broken stderr must not take the
/// run down with it.
pub struct ConsoleSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConsoleSink<io::Stderr> {
    /// Creates a sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: fmt::Debug> fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("writer", &self.writer)
            .finish()
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn emit(&self, record: LogRecord) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let _ = writeln!(writer, "{}", record.message);
        let _ = writer.flush();
    }
}

/// Collects records in memory, unfiltered, for inspection.
///
/// This is the capture fixture used throughout the test suites: wire it
/// behind a logger (optionally through a [`FilteredSink`]) and assert on
/// [`records`](Self::records) or [`messages`](Self::messages) afterwards.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the collected records, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the rendered messages, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.message)
            .collect()
    }

    /// Removes and returns the collected records.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no record has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

/// Applies a filter chain in front of another sink.
///
/// A record reaches the inner sink only when every filter allows it; the
/// conjunction is evaluated in order but, filters being pure, the order
/// never changes the verdict.
pub struct FilteredSink {
    inner: Arc<dyn Sink>,
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilteredSink {
    /// Wraps `inner` with an explicit filter chain.
    #[must_use]
    pub fn new(inner: Arc<dyn Sink>, filters: Vec<Box<dyn RecordFilter>>) -> Self {
        Self { inner, filters }
    }

    /// Wraps `inner` with the canonical chain from
    /// [`standard_filters`].
    #[must_use]
    pub fn with_standard_filters(inner: Arc<dyn Sink>, quiet: bool) -> Self {
        Self::new(inner, standard_filters(quiet))
    }
}

impl fmt::Debug for FilteredSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredSink")
            .field("filters", &self.filters.len())
            .finish_non_exhaustive()
    }
}

impl Sink for FilteredSink {
    fn emit(&self, record: LogRecord) {
        if self.filters.iter().all(|filter| filter.allows(&record)) {
            self.inner.emit(record);
        }
    }
}
