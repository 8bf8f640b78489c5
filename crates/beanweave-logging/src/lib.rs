//! beanweave-logging - Log output for synthesis runs
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber with a reloadable level
//! - [`ReloadHandle`] to switch the level at runtime (debug mode)
//! - [`LogCapture`] to collect events in memory, mostly for tests

mod capture;
mod init;
mod reload;

pub use beanweave_core::LogLevel;
pub use capture::{CaptureLayer, CapturedEvent, LogCapture};
pub use init::{LOG_ENV, init_logging};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogCapture, LogLevel, ReloadHandle, init_logging};
}
