//! Console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // The console has no ANSI support and stamps its own times
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    match tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init()
    {
        Ok(()) => tracing::debug!(%level, "Console logging installed"),
        Err(e) => tracing::debug!(error = %e, "Console logging already installed"),
    }
}
