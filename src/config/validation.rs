use std::collections::HashSet;
use std::fmt;

use url::Url;

use super::error::ConfigError;

/// A URL that passed validation. The trimmed input string is kept as the
/// identifier used in the report, the parsed form is what gets requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    raw: String,
    url: Url,
}

impl Target {
    /// Parse a single input. Returns `None` unless the input has both a
    /// scheme and a non-empty host, written out as `scheme://host`.
    pub fn parse(input: &str) -> Option<Target> {
        // `Url::parse` repairs `http:example.com` into `http://example.com/`
        let (_, rest) = input.split_once(':')?;
        if !rest.starts_with("//") {
            return None;
        }

        let url = Url::parse(input).ok()?;
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());
        if url.scheme().is_empty() || !has_host {
            return None;
        }

        Some(Target {
            raw: input.to_string(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub fn validate_count(count: i64) -> Result<usize, ConfigError> {
    if count < 1 {
        return Err(ConfigError::InvalidCount(count));
    }
    usize::try_from(count).map_err(|_| ConfigError::InvalidCount(count))
}

/// Validate every raw host up front. Any invalid entry fails the whole set,
/// and all invalid entries are reported together.
pub fn validate_urls<I, S>(raw_hosts: I) -> Result<Vec<Target>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut valid_hosts = Vec::new();
    let mut invalid_hosts = Vec::new();
    let mut seen = HashSet::new();

    for host in raw_hosts {
        let host = host.as_ref().trim();
        if host.is_empty() {
            continue;
        }

        match Target::parse(host) {
            Some(target) => {
                if seen.insert(target.as_str().to_string()) {
                    valid_hosts.push(target);
                } else {
                    log::warn!("Ignoring duplicate host {host}");
                }
            }
            None => invalid_hosts.push(host.to_string()),
        }
    }

    if !invalid_hosts.is_empty() {
        return Err(ConfigError::InvalidUrls(invalid_hosts));
    }

    if valid_hosts.is_empty() {
        return Err(ConfigError::NoTargets);
    }

    Ok(valid_hosts)
}
