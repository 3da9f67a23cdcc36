//! Logging configuration and utilities for login row presentation
//!
//! Installs a `tracing-subscriber` fmt subscriber for hosts that do not
//! bring their own, and provides message sanitization so passwords never
//! reach log output.

use std::str::FromStr;
use std::sync::{Once, OnceLock};

use regex::Regex;
use tracing_subscriber::EnvFilter;

/// One-time initialization flag for logging
static INIT: Once = Once::new();

/// Compiled redaction patterns
static SENSITIVE_PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

/// Logging configuration structure
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
        }
    }
}

/// Log levels supported by the logging system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert log level to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line output without timestamps
    Compact,
    /// Full output with timestamps and targets
    Full,
}

/// Initialize logging with the given configuration
///
/// This should be called once at application startup. Subsequent calls
/// are ignored. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        // Another subscriber may already be installed by the host
        let result = match config.format {
            LogFormat::Compact => builder.compact().without_time().with_target(false).try_init(),
            LogFormat::Full => builder.with_target(true).try_init(),
        };

        if let Err(e) = result {
            eprintln!("Logging subscriber not installed: {e}");
        }
    });
}

/// Check if logging has been initialized
pub fn is_logging_initialized() -> bool {
    INIT.is_completed()
}

/// Helper function to sanitize log messages by removing sensitive data
pub fn sanitize_log_message(message: &str) -> String {
    let patterns = SENSITIVE_PATTERNS.get_or_init(|| {
        [
            (r"(?i)password[=:\s]+[^\s,]+", "password=***"),
            (r"(?i)token[=:\s]+[^\s,]+", "token=***"),
            (r"(?i)secret[=:\s]+[^\s,]+", "secret=***"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    });

    let mut sanitized = message.to_string();
    for (re, replacement) in patterns {
        sanitized = re.replace_all(&sanitized, *replacement).into_owned();
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_log_level_string_conversion() {
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_sanitize_log_message() {
        let message = "copied password=hunter2, token=abc123def for alice";
        let sanitized = sanitize_log_message(message);

        assert!(!sanitized.contains("hunter2"));
        assert!(!sanitized.contains("abc123def"));
        assert!(sanitized.contains("password=***"));
        assert!(sanitized.contains("token=***"));
        assert!(sanitized.contains("for alice"));
    }

    #[test]
    fn test_sanitize_leaves_plain_messages() {
        assert_eq!(
            sanitize_log_message("row bound to example.com"),
            "row bound to example.com"
        );
        assert!(sanitize_log_message("Secret: abc").contains("secret=***"));
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            level: LogLevel::Trace,
            format: LogFormat::Full,
        });
        assert!(is_logging_initialized());
    }
}
