//! Shared tracing subscriber for binaries: `RUST_LOG` filter, plain text on stderr.
//!
//! Stdout stays reserved for command output (the directive, JSON, YAML).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. `default_filter` applies when `RUST_LOG` is unset
/// (e.g. `"debug"` for a verbose flag, else [`DEFAULT_FILTER`]).
///
/// Fails if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .try_init()?;
    Ok(())
}
