//! Formatting macros over the facade.
//!
//! `log_at!` works on any [`Log`](crate::Log); the level-specific macros
//! target the process-wide facade returned by [`global`](crate::global).
//! Arguments are only formatted when the record is loggable, and emission
//! errors are discarded.

#[macro_export]
macro_rules! log_at {
    ($log:expr, $level:expr, $tag:expr, $($arg:tt)+) => {{
        let __log = &$log;
        let __tag: &str = $tag;
        let __level = $level;
        if __log.is_loggable(__tag, __level).unwrap_or(false) {
            let _ = __log.log(__level, __tag, &format!($($arg)+), None);
        }
    }};
}

#[macro_export]
macro_rules! log_verbose {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Verbose, $tag, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Debug, $tag, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Info, $tag, $($arg)+) };
}

#[macro_export]
macro_rules! log_warn {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Warn, $tag, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Error, $tag, $($arg)+) };
}

#[macro_export]
macro_rules! log_wtf {
    ($tag:expr, $($arg:tt)+) => { $crate::log_at!($crate::global(), $crate::LogLevel::Assert, $tag, $($arg)+) };
}
