//! Internal diagnostics.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber used for the crate's own events
//!   (option swaps, reloads, sink failures)
//!
//! # Design Decisions
//! - Diagnostics go to stderr through `tracing`, never through the facade,
//!   so a broken sink cannot hide its own failure
//! - `RUST_LOG` wins over the filter passed in

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG` or `default_filter`.
pub fn init_diagnostics(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
