//! Error types for Horizon Cascade.

use std::path::PathBuf;

/// A specialized Result type for Horizon Cascade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Horizon Cascade operations.
///
/// Resolution itself never fails; errors only come from the edges of the
/// system (loading configuration, manipulating timers by id).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Timer-related error.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message())
    }
}

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// The timer ID is invalid, already fired or already stopped.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_error_converts() {
        let err: Error = TimerError::InvalidTimerId.into();
        assert!(matches!(err, Error::Timer(TimerError::InvalidTimerId)));
        assert_eq!(err.to_string(), "Timer error: Invalid or expired timer ID");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = Error::io(
            "cascade.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("cascade.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
