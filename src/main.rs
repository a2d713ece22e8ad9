// Main entry point - Wiring and the single refresh cycle
mod application;
mod domain;
mod infrastructure;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::display_adapter::PanelDriver;
use crate::infrastructure::bootstrap::assemble;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::epd_fuse::EpdFuse;
use crate::infrastructure::gpio::open_indicator;

enum Outcome {
    Done,
    Failed(anyhow::Error),
    Interrupted,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let outcome = tokio::select! {
        result = run() => match result {
            Ok(()) => Outcome::Done,
            Err(err) => Outcome::Failed(err),
        },
        _ = tokio::signal::ctrl_c() => Outcome::Interrupted,
    };

    report(outcome, &mut std::io::stderr())
}

/// Failures print `Error: ...` with their causes; Ctrl-C prints a bare `interrupted`.
fn report(outcome: Outcome, out: &mut impl Write) -> ExitCode {
    let message = match outcome {
        Outcome::Done => return ExitCode::SUCCESS,
        Outcome::Failed(err) => format!("Error: {:?}", err),
        Outcome::Interrupted => "interrupted".to_string(),
    };
    let _ = writeln!(out, "{}", message);
    ExitCode::FAILURE
}

async fn run() -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;

    let mut service = assemble(&config, open_indicator, |path| -> domain::error::Result<Box<dyn PanelDriver>> {
        Ok(Box::new(EpdFuse::open(path)?))
    })
    .context("failed to start the refresh cycle")?;
    service.run(chrono::Local::now()).await?;

    Ok(())
}
