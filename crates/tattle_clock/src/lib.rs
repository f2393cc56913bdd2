//! Timestamp formatting helpers for error and log messages.
//!
//! Convenience functions that render a `chrono` instant with a configurable
//! format string. The instant is always an explicit parameter on the core
//! functions so callers (and tests) control the clock; [`now_utc`] and
//! [`now_local`] wrap the current time. The diagnostic core does not depend
//! on this crate.

#![warn(missing_docs)]

pub mod error;
pub mod stamp;

pub use error::ClockError;
pub use stamp::{
    local_stamp, now_local, now_utc, utc_stamp, LocalStampConfig, UtcStampConfig,
};
