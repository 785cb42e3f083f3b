//! Tracing setup for the bundled demo programs.
//!
//! The library itself never installs a subscriber. Components report
//! through an injected `EventSink`; `TracingSink` forwards those events to
//! whatever subscriber the binary installs here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a stderr subscriber.
///
/// Reads `RUST_LOG`. Defaults to `info` if unset, so pass, fail and
/// rejection events are all visible.
///
/// # Example
/// ```bash
/// RUST_LOG=rulegate=debug cargo run --example registration
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
