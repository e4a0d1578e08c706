//! Request types sent to the backend.

use crate::Recipe;
use serde::{Deserialize, Serialize};

/// The immutable input to a recipe generation.
///
/// At least one non-empty field is the caller's responsibility; the core
/// does not enforce it.
///
/// # Examples
///
/// ```
/// use mixcraft_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .ingredients(vec!["gin".to_string(), "lime".to_string()])
///     .flavors(vec!["sour".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.ingredients.len(), 2);
/// assert!(request.dietary_needs.is_empty());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct GenerationRequest {
    /// Ingredients the drink should use
    pub ingredients: Vec<String>,
    /// Flavor profile keywords
    pub flavors: Vec<String>,
    /// Dietary constraints
    pub dietary_needs: Vec<String>,
}

impl GenerationRequest {
    /// Start building a request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.flavors.is_empty() && self.dietary_needs.is_empty()
    }
}

/// A chat turn about a previously generated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's question
    pub message: String,
    /// The recipe the question is about
    pub recipe_context: Recipe,
}

impl ChatRequest {
    /// Create a chat request about the given recipe.
    pub fn new(message: impl Into<String>, recipe_context: Recipe) -> Self {
        Self {
            message: message.into(),
            recipe_context,
        }
    }
}
