use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Command line tool for testing availability and response time of HTTP(S) servers.
#[derive(Parser, Debug, Clone)]
#[command(name = "pingbox", author, version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["hosts", "file"])))]
pub struct Cli {
    /// Comma separated list of hosts to test (e.g. 'https://ya.ru,https://google.com')
    #[arg(short = 'H', long, env = "PINGBOX_HOSTS")]
    pub hosts: Option<String>,

    /// File with one host per line, or a YAML file with a `targets` list
    #[arg(short = 'F', long, env = "PINGBOX_FILE")]
    pub file: Option<PathBuf>,

    /// Number of requests per host
    #[arg(short = 'C', long, env = "PINGBOX_COUNT", default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// Write the report to this file instead of stdout
    #[arg(short = 'O', long, env = "PINGBOX_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Accept invalid TLS certificates
    #[arg(long, env = "PINGBOX_INSECURE")]
    pub insecure: bool,

    /// Maximum number of probes in flight at once (unbounded when omitted)
    #[arg(long, env = "PINGBOX_MAX_IN_FLIGHT")]
    pub max_in_flight: Option<NonZeroUsize>,
}
