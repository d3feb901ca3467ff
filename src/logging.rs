//! Structured logging setup.
//!
//! Results (reports, quiz questions, chat replies) go to stdout. Diagnostics
//! go to stderr through `tracing`, so piping stdout never mixes the two.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable output
    Pretty,
    /// One JSON object per line
    Json,
}

/// Errors from logging initialization.
#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Failed to parse log filter: {0}")]
    FilterError(String),

    #[error("Failed to set global subscriber: {0}")]
    SetGlobalError(String),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: Level, format: LogFormat) -> Result<(), LogInitError> {
    let filter = build_env_filter(level)?;
    let subscriber = Registry::default()
        .with(output_layer(format, std::io::stderr))
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LogInitError::SetGlobalError(e.to_string()))
}

fn output_layer<W>(format: LogFormat, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    match format {
        LogFormat::Pretty => base.boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}

fn build_env_filter(level: Level) -> Result<EnvFilter, LogInitError> {
    let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    EnvFilter::try_new(&directive).map_err(|e| LogInitError::FilterError(e.to_string()))
}
