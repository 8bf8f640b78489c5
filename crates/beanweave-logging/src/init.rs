//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use beanweave_core::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, reload};

/// Environment variable with extra `EnvFilter` directives, e.g.
/// `beanweave_synth::classify=trace`.
pub const LOG_ENV: &str = "BEANWEAVE_LOG";

/// Install a stderr subscriber whose level can be changed later through
/// [`ReloadHandle::global`].
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    let (filter, handle) = reload::Layer::new(level_filter(level));
    let directives = EnvFilter::try_from_env(LOG_ENV).ok();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(directives)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle, level);
    true
}
