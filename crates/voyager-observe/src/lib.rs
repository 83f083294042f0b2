//! Logging setup shared by the voyager binaries.
//!
//! Configuration is plain serde data ([`LoggerConfig`]) so it can come from a
//! config file, CLI flags or environment variables; [`init_logger`] turns it
//! into a global `tracing` subscriber.

mod config;
mod error;
mod format;
mod level;
mod subscriber;
mod timer;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::LoggerRfc3339;

/// Install the global tracing subscriber described by `cfg`.
///
/// Can succeed only once per process; later calls return
/// [`LoggerError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use voyager_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => subscriber::install_text(cfg),
        LoggerFormat::Json => subscriber::install_json(cfg),
    }
}
