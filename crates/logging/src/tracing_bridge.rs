//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the testrig logging pipeline.
//!
//! This module provides a tracing subscriber layer that forwards tracing
//! events into a [`Logger`], so libraries instrumented with the standard
//! tracing macros (trace!, debug!, info!, warn!, error!) share the tool's
//! verbosity thresholds, labels and sinks.
//!
//! # Architecture
//!
//! - [`LoggerLayer`]: a tracing-subscriber layer holding a [`Logger`]
//! - Events are mapped by their tracing level to the matching emission
//!   method; DEBUG and TRACE become level-1 and level-2 debug messages
//! - The event's `message` field is extracted with a field visitor;
//!   events without one are dropped
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Logger, init_tracing};
//!
//! let logger = Logger::create();
//! init_tracing(logger);
//!
//! // Now standard tracing macros flow through the pipeline.
//! tracing::info!("plan loaded");
//! tracing::debug!("step cache warmed");
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;

/// A tracing layer that forwards events into a [`Logger`].
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Creates a layer emitting through `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    fn forward(&self, level: &Level, message: String) {
        match *level {
            Level::ERROR => self.logger.fail(message),
            Level::WARN => self.logger.warn(message),
            Level::INFO => self.logger.info(message),
            Level::DEBUG => self.logger.debug_at(1, message),
            Level::TRACE => self.logger.debug_at(2, message),
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Some(message) = visitor.message {
            self.forward(event.metadata().level(), message);
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber forwarding tracing events into `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Logger, init_tracing};
///
/// init_tracing(Logger::create());
/// tracing::warn!("falling back to the default plan");
/// ```
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

/// Installs the forwarding layer together with a custom filter.
///
/// This allows combining the pipeline with standard tracing filters for
/// more fine-grained control over which events cross the bridge.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Logger::create(), EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .init();
}
