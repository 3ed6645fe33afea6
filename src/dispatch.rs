use std::iter;
use std::num::NonZeroUsize;
use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use tokio::sync::Semaphore;

use crate::config::Target;
use crate::http_probe::{PROBE_TIMEOUT, ProbeOutcome, probe_url};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Per-probe timeout.
    pub timeout: Duration,
    /// Upper bound on probes awaiting a response at the same time.
    /// `None` fans out every probe of the batch at once.
    pub max_in_flight: Option<NonZeroUsize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            timeout: PROBE_TIMEOUT,
            max_in_flight: None,
        }
    }
}

/// Probe every target `count` times, all concurrently on the current task,
/// and return once every probe has reached a terminal outcome.
///
/// Outcomes come back grouped by target in the order of `targets`.
pub async fn run_batch(
    client: &Client,
    targets: &[Target],
    count: usize,
    options: &BatchOptions,
) -> Vec<ProbeOutcome> {
    let limiter = options.max_in_flight.map(|n| Semaphore::new(n.get()));
    let limiter = limiter.as_ref();

    let probes = targets
        .iter()
        .flat_map(|target| iter::repeat_n(target, count))
        .map(move |target| async move {
            // acquire only fails on a closed semaphore
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            probe_url(client, target, options.timeout).await
        });

    join_all(probes).await
}
