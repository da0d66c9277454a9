//! `slicemap-tour` entry point.
//!
//! Runs the configured tour sections, writing demo output to stdout and logs
//! to stderr. See [`slicemap::tour::TourConfig`] for the environment
//! variables it reads.

use std::io::{self, Write};
use std::process::ExitCode;

use slicemap::tour::{self, TourConfig, TourError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,slicemap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("tour failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TourError> {
    let config = TourConfig::from_env()?;
    tracing::debug!(
        sections = ?config.sections,
        section_headers = config.section_headers,
        "configuration loaded"
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    tour::run(&config, &mut output)?;
    output.flush()?;
    Ok(())
}
