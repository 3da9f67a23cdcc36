//! Logging infrastructure for login row presentation
//!
//! Presenter code logs through `tracing`; this module sets up a subscriber
//! for hosts without one and keeps secrets out of messages.

pub mod logger;

pub use logger::{
    init_logging, is_logging_initialized, sanitize_log_message, LogFormat, LogLevel,
    LoggingConfig,
};

/// Initialize logging with default configuration
pub fn init_default_logging() {
    init_logging(LoggingConfig::default());
}

/// Initialize verbose logging for development
pub fn init_debug_logging() {
    init_logging(LoggingConfig {
        level: LogLevel::Debug,
        format: LogFormat::Full,
    });
}
