//! Logging initialization.
//!
//! Standard error is the shell's diagnostic channel, so logging stays off unless
//! `RUST_LOG` is set:
//! - `RUST_LOG=debug` - parsing, built-ins, spawned processes and wait results
//! - `RUST_LOG=warn` - only problems the shell could not report otherwise

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system, writing to standard error.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    // A subscriber may already be installed when the shell is embedded.
    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}
