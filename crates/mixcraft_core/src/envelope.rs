//! Buffered-path wire envelopes.
//!
//! Every non-streaming endpoint answers with a `{code, ...}` envelope where
//! `"00"` is the success sentinel and `message`, when present, is the
//! display reason for a failure.

use crate::{IngredientAnalysis, Recipe};
use serde::{Deserialize, Serialize};

/// Envelope code signalling success.
pub const SUCCESS_CODE: &str = "00";

/// Response envelope for buffered recipe generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Display reason, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The generated recipe, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
}

/// Response envelope for the saved-recipes listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipesEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Display reason, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The caller's saved recipes
    #[serde(default)]
    pub saved_recipes: Vec<Recipe>,
}

/// Response envelope for operations that return no payload (save, delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Display reason, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response envelope for cocktail image generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Display reason, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// URL of the generated image, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Response envelope for ingredient analysis of an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Display reason, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The analysis result, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<IngredientAnalysis>,
}

/// Response envelope for buffered recipe chat.
///
/// On success `message` carries the assistant's reply; on failure it carries
/// the display reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEnvelope {
    /// Status code; `"00"` on success
    pub code: String,
    /// Assistant reply on success, display reason on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecipeEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl SavedRecipesEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl AckEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ImageEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl AnalysisEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ChatEnvelope {
    /// Whether the envelope carries the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
