//! Error types for the backend transport adapter.

/// Error kinds for transport operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The stream or request could not be opened at all: {0}
    #[display("Backend unavailable: {}", _0)]
    Unavailable(String),

    /// The streaming endpoint answered with a non-streamable content type.
    #[display("Response is not an event stream: {}", _0)]
    NotStreamable(String),

    /// The backend answered with a non-success envelope code.
    #[display("Request rejected (code {}): {}", code, message)]
    Rejected {
        /// Envelope code returned by the backend
        code: String,
        /// Display reason provided by the backend
        message: String,
    },

    /// The connection dropped mid-stream: {0}
    #[display("Stream error: {}", _0)]
    Stream(String),
}

/// Transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The error kind
    pub kind: TransportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
