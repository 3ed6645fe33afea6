pub mod probe;
pub mod result;

pub use probe::{PROBE_TIMEOUT, probe_url};
pub use result::{Classification, ProbeOutcome};

use std::fmt::Write;

/// Render an error and its chain of sources on a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_report_walks_source_chain() {
        #[derive(Debug, thiserror::Error)]
        #[error("error sending request")]
        struct SendError(#[source] io::Error);

        let err = SendError(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
        assert_eq!(report(&err), "error sending request: connection refused");

        let plain = io::Error::new(io::ErrorKind::TimedOut, "timed out");
        assert_eq!(report(&plain), "timed out");
    }
}
