//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, SessionError, TransportError};

/// This is the foundation error enum for the Mixcraft workspace.
///
/// # Examples
///
/// ```
/// use mixcraft_error::{MixcraftError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MixcraftError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MixcraftErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Transport adapter error
    #[from(TransportError)]
    Transport(TransportError),
    /// Generation session error
    #[from(SessionError)]
    Session(SessionError),
}

/// Mixcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mixcraft_error::{MixcraftResult, ConfigError};
///
/// fn might_fail() -> MixcraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mixcraft Error: {}", _0)]
pub struct MixcraftError(Box<MixcraftErrorKind>);

impl MixcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: MixcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MixcraftErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MixcraftErrorKind
impl<T> From<T> for MixcraftError
where
    T: Into<MixcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mixcraft operations.
///
/// # Examples
///
/// ```
/// use mixcraft_error::{MixcraftResult, HttpError};
///
/// fn fetch_data() -> MixcraftResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type MixcraftResult<T> = std::result::Result<T, MixcraftError>;
