//! Demonstrates routing tracing events through the logging pipeline.
//!
//! Run with: `cargo run -p logging --example tracing_demo --features tracing`

use logging::{Logger, init_tracing};

fn main() {
    let logger = Logger::create()
        .with_label("demo")
        .with_verbosity_level(1)
        .with_debug_level(1);

    init_tracing(logger);

    tracing::info!("plan loaded");
    tracing::debug!("step cache warmed");
    tracing::trace!("suppressed below debug level 2");
    tracing::warn!("no tests selected");
    tracing::error!("provision step exploded");
}
