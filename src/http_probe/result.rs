use std::fmt;
use std::time::Duration;

use crate::config::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A response arrived with a status below 400.
    Success,
    /// A response arrived with a status of 400 or above.
    Failed,
    /// No response: connection, TLS or transport failure, or timeout.
    ConnError,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Success => "success",
            Classification::Failed => "failed",
            Classification::ConnError => "error",
        };
        f.write_str(name)
    }
}

/// The outcome of a single probe attempt.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub target: Target,
    pub classification: Classification,
    pub elapsed: Duration,
}
