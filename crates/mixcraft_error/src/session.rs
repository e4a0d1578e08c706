//! Error types for generation sessions.

/// Error kinds for a terminally failed generation session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// The backend reported failure through an `error` stream event.
    #[display("Generation failed: {}", _0)]
    ServerReported(String),

    /// Both the streaming path and the buffered fallback failed.
    #[display("Generation failed: {} (stream: {})", buffered, stream)]
    Exhausted {
        /// Why the streaming path was abandoned
        stream: String,
        /// Why the buffered fallback failed
        buffered: String,
    },
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The error kind
    pub kind: SessionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
