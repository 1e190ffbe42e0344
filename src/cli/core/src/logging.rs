/* src/cli/core/src/logging.rs */

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::config::{LogFormat, LogSection};

/// Install the global subscriber. `RUST_LOG` overrides `log.level`; output
/// goes to stderr so `translate` can print JSON on stdout.
pub fn init(log: &LogSection) -> Result<()> {
  let env_filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::try_new(&log.level)
      .with_context(|| format!("invalid log.level \"{}\"", log.level))?,
  };

  let registry = Registry::default().with(env_filter);
  match log.format {
    LogFormat::Json => registry
      .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
      .try_init()?,
    LogFormat::Pretty => {
      registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).try_init()?
    }
  }
  Ok(())
}
