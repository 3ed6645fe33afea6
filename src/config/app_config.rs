use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::Deserialize;

use super::cli::Cli;
use super::error::ConfigError;
use super::validation::{Target, validate_count, validate_urls};
use crate::dispatch::BatchOptions;

const USER_AGENT: &str = concat!("pingbox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct AppConfig {
    pub targets: Vec<Target>,
    pub count: usize,
    pub output: Option<PathBuf>,
    pub insecure: bool,
    pub batch: BatchOptions,
}

/// A YAML host file.
/// ```yaml
/// targets:
///   - url: https://www.google.com
///   - url: https://www.github.com
/// ```
#[derive(Debug, Deserialize)]
struct HostFile {
    targets: Vec<TargetConfig>,
}

#[derive(Debug, Deserialize)]
struct TargetConfig {
    url: String,
}

/// Build the application configuration from the parsed command line.
/// The count is checked first, then the host list is loaded and validated.
/// Nothing here touches the network.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let count = validate_count(cli.count)?;

    let raw_hosts = match (&cli.hosts, &cli.file) {
        (Some(hosts), _) => hosts.split(',').map(str::to_string).collect(),
        (None, Some(path)) => read_host_file(path)?,
        (None, None) => Vec::new(),
    };
    let targets = validate_urls(raw_hosts)?;

    Ok(AppConfig {
        targets,
        count,
        output: cli.output.clone(),
        insecure: cli.insecure,
        batch: BatchOptions {
            max_in_flight: cli.max_in_flight,
            ..BatchOptions::default()
        },
    })
}

fn read_host_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::HostFile {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    if is_yaml {
        let host_file: HostFile =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::HostFileFormat {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(host_file.targets.into_iter().map(|t| t.url).collect());
    }

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Setup the HTTP client shared by every probe in the batch.
/// Timeouts are applied per request by the prober, not here.
pub fn setup_client(insecure: bool) -> Result<Client, ConfigError> {
    let client = Client::builder()
        .danger_accept_invalid_certs(insecure)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Open the report destination: the given file (created or truncated) or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, ConfigError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConfigError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
