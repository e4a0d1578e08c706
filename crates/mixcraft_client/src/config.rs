//! Configuration for the cocktail backend connection.

use mixcraft_error::ConfigError;

/// Configuration for the cocktail backend connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    /// Base URL of the backend API (e.g., "https://api.example.com/api")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new client configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Loads a `.env` file when present, then reads:
    /// - `MIXCRAFT_BASE_URL` (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("MIXCRAFT_BASE_URL")
            .map_err(|_| ConfigError::new("MIXCRAFT_BASE_URL not set"))?;

        Ok(Self { base_url })
    }

    /// Join an endpoint path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
