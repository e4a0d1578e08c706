//! HTTP transport adapter for the cocktail backend.

use crate::{event_stream, ClientConfig, TokenProvider};
use async_trait::async_trait;
use base64::Engine;
use mixcraft_core::{
    AckEnvelope, AnalysisEnvelope, ChatEnvelope, ChatRequest, GenerationRequest, ImageEnvelope,
    IngredientAnalysis, Recipe, RecipeEnvelope, SavedRecipesEnvelope,
};
use mixcraft_error::{JsonError, MixcraftResult, TransportError, TransportErrorKind};
use mixcraft_interface::{Chat, ChatStream, CocktailDriver, EventStream, ImageStudio, RecipeStore, Streaming};
use std::sync::Arc;
use tracing::instrument;

/// Client for the cocktail recipe backend.
///
/// Owns the buffered and streaming request paths. The auth token source is
/// injected at construction; every request attaches `Authorization: Bearer`
/// when the provider yields a token.
///
/// # Examples
///
/// ```no_run
/// use mixcraft_client::{ClientConfig, CocktailClient, StaticToken};
/// use mixcraft_core::GenerationRequest;
/// use mixcraft_interface::CocktailDriver;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CocktailClient::new(
///     ClientConfig::new("https://api.example.com/api"),
///     Arc::new(StaticToken::new("token")),
/// );
///
/// let request = GenerationRequest::builder()
///     .ingredients(vec!["gin".to_string(), "lime".to_string()])
///     .build()?;
/// let recipe = client.generate(&request).await?;
/// println!("{}", recipe.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CocktailClient {
    config: ClientConfig,
    token: Arc<dyn TokenProvider>,
    client: reqwest::Client,
}

impl std::fmt::Debug for CocktailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CocktailClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl CocktailClient {
    /// Create a new client.
    #[instrument(skip(config, token), fields(base_url = %config.base_url))]
    pub fn new(config: ClientConfig, token: Arc<dyn TokenProvider>) -> Self {
        tracing::debug!("Creating cocktail client");
        Self {
            config,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads `MIXCRAFT_BASE_URL` (required) and `MIXCRAFT_API_TOKEN`
    /// (optional) after loading a `.env` file when present.
    pub fn from_env() -> MixcraftResult<Self> {
        let config = ClientConfig::from_env()?;
        let token = match std::env::var("MIXCRAFT_API_TOKEN") {
            Ok(token) => crate::StaticToken::new(token),
            Err(_) => crate::StaticToken::none(),
        };
        Ok(Self::new(config, Arc::new(token)))
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> MixcraftResult<reqwest::Response> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::error!(error = %e, "Request failed");
            TransportError::new(TransportErrorKind::Unavailable(e.to_string()))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "Backend returned error status");
            return Err(TransportError::new(TransportErrorKind::Unavailable(format!(
                "backend returned {status}"
            )))
            .into());
        }

        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> MixcraftResult<T> {
        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse response");
            JsonError::new(format!("Failed to parse response: {e}")).into()
        })
    }

    fn rejected(code: String, message: Option<String>, fallback: &str) -> TransportError {
        TransportError::new(TransportErrorKind::Rejected {
            code,
            message: message.unwrap_or_else(|| fallback.to_string()),
        })
    }
}

#[async_trait]
impl CocktailDriver for CocktailClient {
    /// Buffered generation: one request, one complete recipe.
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerationRequest) -> MixcraftResult<Recipe> {
        let url = self.config.endpoint("cocktail");
        tracing::debug!(%url, "Sending buffered generation request");

        let response = self.send(self.client.post(&url).json(req)).await?;
        let envelope: RecipeEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(Self::rejected(
                envelope.code,
                envelope.message,
                "Failed to generate recipe",
            )
            .into());
        }

        envelope.recipe.ok_or_else(|| {
            JsonError::new("Success envelope without a recipe payload").into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "mixcraft-http"
    }
}

#[async_trait]
impl Streaming for CocktailClient {
    #[instrument(skip(self, req))]
    async fn generate_stream(&self, req: &GenerationRequest) -> MixcraftResult<EventStream> {
        let url = self.config.endpoint("cocktail/stream");
        tracing::debug!(%url, "Opening generation event stream");

        let response = self.send(self.client.post(&url).json(req)).await?;
        require_event_stream(&response)?;

        tracing::debug!("Stream open, parsing events");
        Ok(event_stream(response))
    }
}

#[async_trait]
impl RecipeStore for CocktailClient {
    #[instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn save_recipe(&self, recipe: &Recipe) -> MixcraftResult<()> {
        let url = self.config.endpoint("cocktail/save");
        tracing::debug!(%url, "Saving recipe");

        let response = self.send(self.client.post(&url).json(recipe)).await?;
        let envelope: AckEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(
                Self::rejected(envelope.code, envelope.message, "Failed to save recipe").into(),
            );
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn saved_recipes(&self) -> MixcraftResult<Vec<Recipe>> {
        let url = self.config.endpoint("cocktail/save");
        tracing::debug!(%url, "Fetching saved recipes");

        let response = self.send(self.client.get(&url)).await?;
        let envelope: SavedRecipesEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(Self::rejected(
                envelope.code,
                envelope.message,
                "Failed to fetch saved recipes",
            )
            .into());
        }
        Ok(envelope.saved_recipes)
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, cocktail_id: &str) -> MixcraftResult<()> {
        let url = self
            .config
            .endpoint(&format!("cocktail/cocktail/{cocktail_id}"));
        tracing::debug!(%url, "Deleting recipe");

        let response = self.send(self.client.delete(&url)).await?;
        let envelope: AckEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(Self::rejected(
                envelope.code,
                envelope.message,
                "Failed to delete cocktail",
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl Chat for CocktailClient {
    #[instrument(skip(self, req))]
    async fn chat(&self, req: &ChatRequest) -> MixcraftResult<String> {
        let url = self.config.endpoint("cocktail/chat");
        tracing::debug!(%url, "Sending chat request");

        let response = self.send(self.client.post(&url).json(req)).await?;
        let envelope: ChatEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(
                Self::rejected(envelope.code, envelope.message, "Failed to get response").into(),
            );
        }

        envelope
            .message
            .ok_or_else(|| JsonError::new("Success envelope without a reply").into())
    }

    #[instrument(skip(self, req))]
    async fn chat_stream(&self, req: &ChatRequest) -> MixcraftResult<ChatStream> {
        let url = self.config.endpoint("cocktail/chat/stream");
        tracing::debug!(%url, "Opening chat event stream");

        let response = self.send(self.client.post(&url).json(req)).await?;
        require_event_stream(&response)?;

        Ok(event_stream(response))
    }
}

#[async_trait]
impl ImageStudio for CocktailClient {
    #[instrument(skip(self, ingredients))]
    async fn generate_image(&self, name: &str, ingredients: &[String]) -> MixcraftResult<String> {
        let url = self.config.endpoint("cocktail/generate-image");

        let made_with = if ingredients.is_empty() {
            String::new()
        } else {
            format!("Made with {}. ", ingredients.join(", "))
        };
        let prompt = format!(
            "A professional, appetizing photo of a {name} cocktail. {made_with}\
             High quality, studio lighting, on a bar counter with elegant garnish, photorealistic."
        );

        tracing::debug!(%url, "Requesting cocktail image");
        let body = serde_json::json!({ "prompt": prompt });
        let response = self.send(self.client.post(&url).json(&body)).await?;
        let envelope: ImageEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(Self::rejected(
                envelope.code,
                envelope.message,
                "Failed to generate cocktail image",
            )
            .into());
        }

        envelope
            .image_url
            .ok_or_else(|| JsonError::new("Success envelope without an image URL").into())
    }

    #[instrument(skip(self, image))]
    async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> MixcraftResult<IngredientAnalysis> {
        let url = self.config.endpoint("cocktail/analyze-image");

        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "imageData": format!("data:{mime_type};base64,{encoded}"),
        });

        tracing::debug!(%url, image_bytes = image.len(), "Analyzing image");
        let response = self.send(self.client.post(&url).json(&body)).await?;
        let envelope: AnalysisEnvelope = Self::decode(response).await?;

        if !envelope.is_success() {
            return Err(Self::rejected(
                envelope.code,
                envelope.message,
                "Failed to analyze image",
            )
            .into());
        }

        envelope
            .analysis
            .ok_or_else(|| JsonError::new("Success envelope without an analysis").into())
    }
}

/// Reject responses whose content type cannot carry an event stream.
fn require_event_stream(response: &reqwest::Response) -> MixcraftResult<()> {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("text/event-stream")
        || content_type.starts_with("application/octet-stream")
    {
        Ok(())
    } else {
        Err(TransportError::new(TransportErrorKind::NotStreamable(
            content_type.to_string(),
        ))
        .into())
    }
}
