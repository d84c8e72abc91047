//! Argbind Runtime - configuration and logging for binaries using argbind.
//!
//! This crate provides:
//! - Layered configuration (`ArgbindConfig`, `ConfigLoader`) over figment
//! - Logging setup (`LoggingBuilder`, `SpanEvents`) over tracing-subscriber
//!
//! ```rust,ignore
//! use argbind_runtime::{ConfigLoader, logging};
//!
//! let config = ConfigLoader::new().load()?;
//! logging::init_from_config(&config.logging);
//!
//! let args = config.analyzer::<CopyArgs>().analyze(std::env::args().skip(1))?;
//! ```

pub mod config;
pub mod logging;

pub use config::{ArgbindConfig, ConfigError, ConfigLoader, ConfigResult, LoggingConfig};
pub use logging::{LoggingBuilder, SpanEvents};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `span`, `event`
/// - `instrument` attribute
/// - `Level` for span creation
pub mod prelude {
    pub use tracing::{Level, debug, error, event, info, instrument, span, trace, warn};
}
