//! Shared error type across tile38-prom crates.

use thiserror::Error;

/// Stable error classification, used in logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dial, auth, format negotiation or pool checkout failed.
    Connection,
    /// Backend answered with `ok: false`.
    Backend,
    /// Backend reply was not valid JSON.
    Parse,
    /// Invalid configuration.
    Config,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// String representation used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Connection => "CONNECTION",
            ErrorKind::Backend => "BACKEND",
            ErrorKind::Parse => "PARSE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by the core and the exporter.
#[derive(Debug, Clone, Error)]
pub enum ExporterError {
    #[error("connection error: {0}")]
    Connection(String),
    /// Carries the backend's own message verbatim.
    #[error("{0}")]
    Backend(String),
    #[error("invalid backend reply: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::Connection(_) => ErrorKind::Connection,
            ExporterError::Backend(_) => ErrorKind::Backend,
            ExporterError::Parse(_) => ErrorKind::Parse,
            ExporterError::Config(_) => ErrorKind::Config,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }
}
