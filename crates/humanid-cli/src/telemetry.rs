//! Log output for the `humanid` binary.
//!
//! Logs are written to stderr so stdout only ever carries results. The level
//! is taken from `RUST_LOG` and defaults to `warn` when it is unset; a
//! malformed value is an error. `--log-json` switches the fmt layer to one
//! JSON object per event.
//!
//! ```bash
//! RUST_LOG=humanid=trace humanid decode AHEHK
//! ```

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`] only
/// when the variable is unset or empty.
fn env_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env()?)
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is set but cannot be parsed, or if a global
/// subscriber is already installed.
pub fn init_telemetry(json: bool) -> anyhow::Result<()> {
    let filter = env_filter()?;

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
