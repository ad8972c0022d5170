//! Logging setup for the i3mate applet.
//!
//! Built on the `tracing` ecosystem. The applet logs to `stderr` only;
//! there is no file logging, the host panel's journal captures the stream.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Filters messages based on the `RUST_LOG` environment variable,
/// defaulting to "info" level if `RUST_LOG` is not set or is invalid.
/// Errors during initialization (e.g., if a global subscriber is already
/// set) are ignored, so this is safe to call from tests as well as from
/// the binary.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}
