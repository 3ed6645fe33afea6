use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

pub mod config;
use config::{Cli, ConfigError, load_config, open_output, setup_client};
pub mod dispatch;
use dispatch::run_batch;
pub mod http_probe;
pub mod logging;
pub mod report;
use report::{aggregate, render_banner, render_report};

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),
}

async fn run(cli: &Cli) -> Result<(), RunError> {
    let config = load_config(cli)?;
    let mut sink = open_output(config.output.as_deref())?;
    let client = setup_client(config.insecure)?;

    if let Some(path) = &config.output {
        log::info!("Writing report to {}", path.display());
    }
    render_banner(&config.targets, config.count, &mut sink).map_err(RunError::Report)?;

    let outcomes = run_batch(&client, &config.targets, config.count, &config.batch).await;
    let stats = aggregate(&outcomes);
    debug_assert!(stats.iter().all(|host| host.total() == config.count));

    render_report(&stats, &mut sink).map_err(RunError::Report)?;
    sink.flush().map_err(RunError::Report)?;
    Ok(())
}

/// Fatal errors bypass the logger so a restrictive `RUST_LOG` cannot hide them.
fn report_fatal(err: &RunError, out: &mut impl Write) {
    let _ = writeln!(out, "[ERROR] {err}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&e, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
