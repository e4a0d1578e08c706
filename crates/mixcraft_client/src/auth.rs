//! Auth token access for the transport adapter.
//!
//! The token source is an explicitly passed dependency rather than ambient
//! global state, so the client stays testable without a session store.

/// Supplies the bearer token attached to backend requests.
pub trait TokenProvider: Send + Sync {
    /// The current token, or `None` for unauthenticated calls.
    fn token(&self) -> Option<String>;
}

/// A fixed token, or none at all.
///
/// # Examples
///
/// ```
/// use mixcraft_client::{StaticToken, TokenProvider};
///
/// let provider = StaticToken::new("secret");
/// assert_eq!(provider.token().as_deref(), Some("secret"));
///
/// let anonymous = StaticToken::none();
/// assert!(anonymous.token().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// A provider that always yields the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// A provider for unauthenticated calls.
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
