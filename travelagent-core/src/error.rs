use thiserror::Error;

/// Why a transport call failed. Kept for logs; the session treats every
/// kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    InvalidRequest,
    Connect,
    Timeout,
    Status(u16),
    Decode,
    /// The submitting task was dropped or panicked before the call settled.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Connect, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn status(code: u16) -> Self {
        Self::new(
            TransportErrorKind::Status(code),
            format!("The server responded with HTTP {code}."),
        )
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Decode, message)
    }

    pub fn interrupted() -> Self {
        Self::new(
            TransportErrorKind::Interrupted,
            "The request was interrupted before it finished.",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid agent base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}
