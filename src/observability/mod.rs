//! Observability of the facade itself.
//!
//! # Data Flow
//! ```text
//! Facade internals produce:
//!     → logging.rs (tracing events for swaps, reloads, sink failures)
//!     → metrics.rs (counters for emitted and suppressed records)
//! ```

pub mod logging;
pub mod metrics;
