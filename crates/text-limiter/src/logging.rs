//! tracing-subscriber initialization

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; `level` is used when it is unset or invalid.
/// Returns `false` if a global subscriber was already installed (e.g. by the host).
pub fn init_logging(level: LogLevel) -> bool {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer())
    .try_init()
    .is_ok()
}
