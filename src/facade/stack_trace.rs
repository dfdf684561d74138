//! Error-to-text conversion.

use std::error::Error;
use std::fmt::Write;

/// Loggable description of `err` and its chain of sources.
///
/// Returns an empty string for `None`. Otherwise the first line is the
/// error's `Display` output, followed by one `Caused by: ...` line per
/// error reachable through [`Error::source`].
pub fn stack_trace_string(err: Option<&dyn Error>) -> String {
    let Some(err) = err else {
        return String::new();
    };

    let mut out = err.to_string();
    if out.is_empty() {
        out = format!("{err:?}");
    }
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("request failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(stack_trace_string(None), "");
    }

    #[test]
    fn test_single_error_contains_message() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such thing");
        assert_eq!(stack_trace_string(Some(&err)), "no such thing");
    }

    #[test]
    fn test_chain_is_listed() {
        let err = Outer(io::Error::new(io::ErrorKind::TimedOut, "socket timed out"));
        let text = stack_trace_string(Some(&err));
        assert_eq!(text, "request failed\nCaused by: socket timed out");
    }
}
