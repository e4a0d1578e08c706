//! Ingredient analysis of an uploaded photo.

use serde::{Deserialize, Serialize};

/// What the backend recognized in an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    /// Ingredients recognized in the image
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-form description of what was seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
