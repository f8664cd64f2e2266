//! Logging utilities for coinquery.
//!
//! Re-exports the tracing macros used across the workspace and owns the
//! subscriber setup. Every layer writes to stderr: stdout is reserved for
//! the balance document.

pub use tracing::{debug, error, info, instrument, trace, warn, Level};
pub use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither a level nor `RUST_LOG` is given
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter from an explicit level, the verbose switch, or `RUST_LOG`
pub fn resolve_filter(
    level: Option<&str>,
    verbose: bool,
) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(level) = level {
        return Ok(EnvFilter::try_new(level)?);
    }
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }
    Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
}

/// Initialize the global tracing subscriber for the CLI
pub fn init_tracing(
    level: Option<&str>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = resolve_filter(level, verbose)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()?;

    Ok(())
}

/// Initialize tracing for testing with simplified output
pub fn init_tracing_test() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init()?;

    Ok(())
}
