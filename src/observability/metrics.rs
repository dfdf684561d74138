//! Facade metrics.
//!
//! # Metrics
//! - `taglog_records_total` (counter): records accepted by at least one sink, by level
//! - `taglog_records_suppressed_total` (counter): records filtered out, by level
//! - `taglog_sink_failures_total` (counter): failed sink writes, by sink
//! - `taglog_option_swaps_total` (counter): options installed
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs a recorder
//! - Without a recorder every call is a no-op

use metrics::counter;

use crate::level::LogLevel;

pub fn record_emitted(level: LogLevel) {
    counter!("taglog_records_total", "level" => level.as_str()).increment(1);
}

pub fn record_suppressed(level: LogLevel) {
    counter!("taglog_records_suppressed_total", "level" => level.as_str()).increment(1);
}

pub fn record_sink_failure(sink: &'static str) {
    counter!("taglog_sink_failures_total", "sink" => sink).increment(1);
}

pub fn record_option_swap() {
    counter!("taglog_option_swaps_total").increment(1);
}
