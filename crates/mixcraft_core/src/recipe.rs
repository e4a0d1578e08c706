//! The complete cocktail recipe and its health assessment.

use serde::{Deserialize, Serialize};

/// A complete cocktail recipe as returned by the backend.
///
/// This is the authoritative snapshot a generation session resolves with,
/// and the payload of the terminal `done` stream event. Wire field names are
/// camelCase.
///
/// # Examples
///
/// ```
/// use mixcraft_core::Recipe;
///
/// let recipe = Recipe {
///     name: "Gin Fizz".to_string(),
///     ingredients: vec!["gin".to_string(), "lime".to_string(), "soda".to_string()],
///     instructions: vec!["shake".to_string(), "pour".to_string()],
///     ..Default::default()
/// };
///
/// assert_eq!(recipe.ingredients.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display name of the cocktail
    pub name: String,
    /// Short description of the drink
    #[serde(default)]
    pub description: String,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Optional bartender's tip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Health rating on a 0-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_rating: Option<u8>,
    /// Notes explaining the health rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_notes: Option<String>,
    /// URL of the generated cocktail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Persistent identifier assigned by the backend on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cocktail_id: Option<String>,
}

/// Health assessment carried by the `health` stream event.
///
/// Rating and notes always arrive together and are applied to the draft
/// atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInfo {
    /// Health rating on a 0-10 scale
    pub rating: u8,
    /// Notes explaining the rating
    #[serde(default)]
    pub notes: String,
}
