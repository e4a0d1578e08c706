//! Events parsed from the streaming wire protocol.

use crate::{HealthInfo, Recipe, RecipeDraft};
use serde::{Deserialize, Serialize};

/// One discriminated unit parsed from the recipe stream.
///
/// Wire form is `{"type": <tag>, "data": <payload>}`, one record per
/// `data: `-prefixed line.
///
/// # Examples
///
/// ```
/// use mixcraft_core::RecipeEvent;
///
/// let event: RecipeEvent = serde_json::from_str(
///     r#"{"type":"name","data":"Gin Fizz"}"#,
/// ).unwrap();
/// assert_eq!(event, RecipeEvent::Name("Gin Fizz".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum RecipeEvent {
    /// Human-readable progress text; does not touch the draft
    Status(String),
    /// Cocktail name
    Name(String),
    /// Short description
    Description(String),
    /// Full current ingredient list (replaces, never appends)
    Ingredients(Vec<String>),
    /// Full current instruction list (replaces, never appends)
    Instructions(Vec<String>),
    /// Bartender's tip
    Tip(String),
    /// Health rating and notes, applied atomically
    Health(HealthInfo),
    /// Recipe text finalized; image still pending. Fields shallow-merge
    Complete(RecipeDraft),
    /// Generated image URL
    Image(String),
    /// Terminal: the full recipe, superseding the accumulated draft
    Done(Recipe),
    /// Terminal: backend-reported failure
    Error(String),
}

impl RecipeEvent {
    /// Whether this event ends the stream for a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RecipeEvent::Done(_) | RecipeEvent::Error(_))
    }
}

/// One discriminated unit parsed from the recipe chat stream.
///
/// Chat shares the recipe stream's `{"type", "data"}` record shape and the
/// same parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChatEvent {
    /// Human-readable progress text
    Status(String),
    /// Incremental reply text
    Delta(String),
    /// Terminal: the full assistant reply
    Done(String),
    /// Terminal: backend-reported failure
    Error(String),
}

impl ChatEvent {
    /// Whether this event ends the chat stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChatEvent::Done(_) | ChatEvent::Error(_))
    }
}
