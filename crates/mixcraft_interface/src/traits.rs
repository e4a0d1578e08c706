//! Trait definitions for cocktail backends and their capabilities.

use crate::{ChatStream, EventStream};
use async_trait::async_trait;
use mixcraft_core::{ChatRequest, GenerationRequest, IngredientAnalysis, Recipe};
use mixcraft_error::MixcraftResult;

/// Core trait that all cocktail backends must implement.
///
/// This provides the minimal interface for buffered recipe generation.
/// Additional capabilities are exposed through optional traits.
#[async_trait]
pub trait CocktailDriver: Send + Sync {
    /// Generate a complete recipe in a single buffered request.
    async fn generate(&self, req: &GenerationRequest) -> MixcraftResult<Recipe>;

    /// Provider name (e.g., "mixcraft-http", "mock").
    fn provider_name(&self) -> &'static str;
}

/// Trait for backends that support progressive recipe streaming.
#[async_trait]
pub trait Streaming: CocktailDriver {
    /// Open the event stream for a generation.
    ///
    /// Returns a stream that yields parsed recipe events as they arrive.
    /// Dropping the stream aborts the underlying connection; no further
    /// events are delivered after that.
    async fn generate_stream(&self, req: &GenerationRequest) -> MixcraftResult<EventStream>;
}

/// Trait for backends that persist recipes for the caller.
#[async_trait]
pub trait RecipeStore: CocktailDriver {
    /// Save a recipe to the caller's collection.
    async fn save_recipe(&self, recipe: &Recipe) -> MixcraftResult<()>;

    /// List the caller's saved recipes.
    async fn saved_recipes(&self) -> MixcraftResult<Vec<Recipe>>;

    /// Delete a saved recipe by its backend-assigned identifier.
    async fn delete_recipe(&self, cocktail_id: &str) -> MixcraftResult<()>;
}

/// Trait for backends that answer questions about a generated recipe.
#[async_trait]
pub trait Chat: CocktailDriver {
    /// Ask a question about a recipe and await the full reply.
    async fn chat(&self, req: &ChatRequest) -> MixcraftResult<String>;

    /// Ask a question about a recipe and stream the reply.
    async fn chat_stream(&self, req: &ChatRequest) -> MixcraftResult<ChatStream>;
}

/// Trait for backends that generate and analyze cocktail imagery.
#[async_trait]
pub trait ImageStudio: CocktailDriver {
    /// Generate an image for a cocktail, returning its URL.
    async fn generate_image(&self, name: &str, ingredients: &[String]) -> MixcraftResult<String>;

    /// Recognize ingredients in an uploaded photo.
    async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> MixcraftResult<IngredientAnalysis>;

    /// Attach a generated image to a recipe that lacks one.
    ///
    /// Best-effort: a recipe that already carries an image is returned
    /// unchanged, and a failed image call returns the recipe without one.
    async fn enhance_recipe(&self, mut recipe: Recipe) -> Recipe {
        if recipe.image_url.is_some() {
            return recipe;
        }

        match self.generate_image(&recipe.name, &recipe.ingredients).await {
            Ok(url) => {
                recipe.image_url = Some(url);
                recipe
            }
            Err(e) => {
                tracing::warn!(error = %e, name = %recipe.name, "Image enhancement failed");
                recipe
            }
        }
    }
}
