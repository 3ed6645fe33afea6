use std::io;
use std::path::PathBuf;

/// Errors raised while turning command line input into a runnable batch.
/// Every variant is fatal and is reported before any probe is issued.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The number of requests (--count) must be greater than zero, got {0}.")]
    InvalidCount(i64),

    #[error(
        "Invalid or incomplete URLs found: {}. Please provide full URLs including the scheme (e.g. 'https://google.com').",
        .0.join(", ")
    )]
    InvalidUrls(Vec<String>),

    #[error("No valid URLs found to test.")]
    NoTargets,

    #[error("Failed to read host file {}: {source}", path.display())]
    HostFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid host file {}: {source}", path.display())]
    HostFileFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
