use std::io::{self, Write};

use super::HostStats;
use crate::config::Target;

const SEPARATOR_BASE_WIDTH: usize = 20;

/// Line oriented destination for the report.
pub trait OutputSink {
    fn output(&mut self, message: &str) -> io::Result<()>;
}

impl<W: Write + ?Sized> OutputSink for W {
    fn output(&mut self, message: &str) -> io::Result<()> {
        writeln!(self, "{message}")
    }
}

fn seconds(duration: std::time::Duration) -> String {
    format!("{:.4}s", duration.as_secs_f64())
}

fn render_host(stats: &HostStats, sink: &mut (impl OutputSink + ?Sized)) -> io::Result<()> {
    let host = stats.target.as_str();

    sink.output(&format!("--- Statistics for {host} ---"))?;
    sink.output(&format!("  Host:     {host}"))?;
    sink.output(&format!("  Success:  {}", stats.success))?;
    sink.output(&format!("  Failed:   {} (client/server errors)", stats.failed))?;
    sink.output(&format!("  Errors:   {} (connection problems)", stats.error))?;

    match stats.timing() {
        Some(timing) => {
            sink.output(&format!("  Min time: {}", seconds(timing.min)))?;
            sink.output(&format!("  Max time: {}", seconds(timing.max)))?;
            sink.output(&format!("  Avg time: {}", seconds(timing.mean)))?;
        }
        None => sink.output("  No successful requests to compute timing statistics.")?,
    }

    sink.output(&"-".repeat(SEPARATOR_BASE_WIDTH + host.chars().count()))
}

/// Write the run header: hosts under test and requests per host, then a blank line.
pub fn render_banner(
    targets: &[Target],
    count: usize,
    sink: &mut (impl OutputSink + ?Sized),
) -> io::Result<()> {
    let hosts: Vec<&str> = targets.iter().map(Target::as_str).collect();
    sink.output(&format!("Testing hosts: {}", hosts.join(", ")))?;
    sink.output(&format!("Requests per host: {count}"))?;
    sink.output("")
}

/// Write one block per host, in the order given.
pub fn render_report(stats: &[HostStats], sink: &mut (impl OutputSink + ?Sized)) -> io::Result<()> {
    for host in stats {
        render_host(host, sink)?;
    }
    Ok(())
}
