//! The recipe stream reducer.

use crate::{Recipe, RecipeDraft, RecipeEvent};

/// What a single application of an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Status text changed; the draft did not
    Status,
    /// The draft gained or replaced fields
    Progress,
    /// The stream reached its successful terminal event
    Done,
    /// The stream reached its failure terminal event
    Failed,
    /// Dropped: a terminal outcome was already reached
    Ignored,
}

/// Terminal outcome of a folded stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldOutcome {
    /// Explicit `done` event observed; payload is the authoritative recipe
    Done(Recipe),
    /// Explicit `error` event observed
    Failed(String),
}

/// Folds an ordered sequence of stream events into an evolving partial
/// recipe and classifies the terminal condition.
///
/// The fold is pure state: no I/O, no retries, no fallback decisions. Events
/// applied after a terminal outcome are ignored. An `image` plus a `complete`
/// without an explicit `done` is not success; only `done` (or the buffered
/// fallback path at the session level) resolves a generation successfully.
///
/// # Examples
///
/// ```
/// use mixcraft_core::{RecipeEvent, RecipeFold, Step};
///
/// let mut fold = RecipeFold::new();
/// assert_eq!(fold.apply(&RecipeEvent::Name("Gin Fizz".to_string())), Step::Progress);
/// assert_eq!(fold.draft().name.as_deref(), Some("Gin Fizz"));
/// assert!(!fold.is_terminal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeFold {
    draft: RecipeDraft,
    status: String,
    outcome: Option<FoldOutcome>,
}

impl RecipeFold {
    /// Create an empty fold with no status text.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated partial recipe.
    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// The latest status text from the stream.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The terminal outcome, once one has been observed.
    pub fn outcome(&self) -> Option<&FoldOutcome> {
        self.outcome.as_ref()
    }

    /// Whether a terminal event has been observed.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The final recipe, when the fold ended with `done`.
    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.outcome {
            Some(FoldOutcome::Done(recipe)) => Some(recipe),
            _ => None,
        }
    }

    /// Apply one event in arrival order.
    pub fn apply(&mut self, event: &RecipeEvent) -> Step {
        if self.outcome.is_some() {
            return Step::Ignored;
        }

        match event {
            RecipeEvent::Status(text) => {
                self.status = text.clone();
                Step::Status
            }
            RecipeEvent::Name(name) => {
                self.draft.name = Some(name.clone());
                Step::Progress
            }
            RecipeEvent::Description(description) => {
                self.draft.description = Some(description.clone());
                Step::Progress
            }
            RecipeEvent::Ingredients(ingredients) => {
                // Each event carries the full current list from the server.
                self.draft.ingredients = Some(ingredients.clone());
                Step::Progress
            }
            RecipeEvent::Instructions(instructions) => {
                self.draft.instructions = Some(instructions.clone());
                Step::Progress
            }
            RecipeEvent::Tip(tip) => {
                self.draft.tip = Some(tip.clone());
                Step::Progress
            }
            RecipeEvent::Health(health) => {
                self.draft.health_rating = Some(health.rating);
                self.draft.health_notes = Some(health.notes.clone());
                Step::Progress
            }
            RecipeEvent::Complete(patch) => {
                self.draft.merge(patch);
                Step::Progress
            }
            RecipeEvent::Image(url) => {
                self.draft.image_url = Some(url.clone());
                Step::Progress
            }
            RecipeEvent::Done(recipe) => {
                self.draft = RecipeDraft::from(recipe.clone());
                self.outcome = Some(FoldOutcome::Done(recipe.clone()));
                Step::Done
            }
            RecipeEvent::Error(message) => {
                // Draft is kept as-is for diagnostics; it is not the result.
                self.outcome = Some(FoldOutcome::Failed(message.clone()));
                Step::Failed
            }
        }
    }
}
