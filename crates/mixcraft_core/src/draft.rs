//! The accumulating partial recipe built up during streaming.

use crate::Recipe;
use serde::{Deserialize, Serialize};

/// The partial, in-progress representation of a recipe during streaming.
///
/// All fields are optional until populated. Fields are monotonically filled:
/// once set by an event, a field is only overwritten by a later event of the
/// same or a superseding kind, never reverted to empty.
///
/// The draft doubles as the payload of the `complete` stream event, where it
/// acts as a patch of finalized recipe text that is shallow-merged into the
/// accumulated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Display name of the cocktail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description of the drink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered ingredient list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Ordered preparation steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
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
    /// Persistent identifier assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cocktail_id: Option<String>,
}

impl RecipeDraft {
    /// True when no field has been populated yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge a patch into this draft.
    ///
    /// Only fields present in the patch overwrite; absent fields are left
    /// untouched, preserving the monotonic-fill invariant.
    pub fn merge(&mut self, patch: &RecipeDraft) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(ingredients) = &patch.ingredients {
            self.ingredients = Some(ingredients.clone());
        }
        if let Some(instructions) = &patch.instructions {
            self.instructions = Some(instructions.clone());
        }
        if let Some(tip) = &patch.tip {
            self.tip = Some(tip.clone());
        }
        if let Some(rating) = patch.health_rating {
            self.health_rating = Some(rating);
        }
        if let Some(notes) = &patch.health_notes {
            self.health_notes = Some(notes.clone());
        }
        if let Some(url) = &patch.image_url {
            self.image_url = Some(url.clone());
        }
        if let Some(id) = &patch.cocktail_id {
            self.cocktail_id = Some(id.clone());
        }
    }
}

impl From<Recipe> for RecipeDraft {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: Some(recipe.name),
            description: Some(recipe.description),
            ingredients: Some(recipe.ingredients),
            instructions: Some(recipe.instructions),
            tip: recipe.tip,
            health_rating: recipe.health_rating,
            health_notes: recipe.health_notes,
            image_url: recipe.image_url,
            cocktail_id: recipe.cocktail_id,
        }
    }
}
