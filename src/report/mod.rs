use std::collections::HashMap;
use std::time::Duration;

use crate::config::Target;
use crate::http_probe::{Classification, ProbeOutcome};

pub mod render;

pub use render::{render_banner, render_report};

/// Per-target accumulator built from the outcomes of a batch.
#[derive(Debug, Clone)]
pub struct HostStats {
    pub target: Target,
    pub success: usize,
    pub failed: usize,
    pub error: usize,
    /// Elapsed time of successful probes only, in the order they were folded.
    pub durations: Vec<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl HostStats {
    fn new(target: Target) -> Self {
        HostStats {
            target,
            success: 0,
            failed: 0,
            error: 0,
            durations: Vec::new(),
        }
    }

    fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome.classification {
            Classification::Success => {
                self.success += 1;
                self.durations.push(outcome.elapsed);
            }
            Classification::Failed => self.failed += 1,
            Classification::ConnError => self.error += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failed + self.error
    }

    /// Min, max and mean over successful probes, or `None` when there were none.
    pub fn timing(&self) -> Option<TimingStats> {
        let min = *self.durations.iter().min()?;
        let max = *self.durations.iter().max()?;
        let sum: Duration = self.durations.iter().sum();
        let mean = sum / u32::try_from(self.durations.len()).ok()?;
        Some(TimingStats { min, max, mean })
    }
}

/// Fold outcomes into per-target statistics. Targets appear in the order of
/// their first outcome.
pub fn aggregate<'a, I>(outcomes: I) -> Vec<HostStats>
where
    I: IntoIterator<Item = &'a ProbeOutcome>,
{
    let mut stats: Vec<HostStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for outcome in outcomes {
        let slot = *index
            .entry(outcome.target.as_str().to_string())
            .or_insert_with(|| {
                stats.push(HostStats::new(outcome.target.clone()));
                stats.len() - 1
            });
        stats[slot].record(outcome);
    }

    stats
}
