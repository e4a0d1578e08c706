//! Core data types for the Mixcraft cocktail recipe client.
//!
//! This crate provides the foundation data types used across all Mixcraft
//! interfaces, plus the pure recipe stream reducer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod draft;
mod envelope;
mod event;
mod fold;
mod recipe;
mod request;
mod telemetry;

pub use analysis::IngredientAnalysis;
pub use draft::RecipeDraft;
pub use envelope::{
    AckEnvelope, AnalysisEnvelope, ChatEnvelope, ImageEnvelope, RecipeEnvelope,
    SavedRecipesEnvelope, SUCCESS_CODE,
};
pub use event::{ChatEvent, RecipeEvent};
pub use fold::{FoldOutcome, RecipeFold, Step};
pub use recipe::{HealthInfo, Recipe};
pub use request::{
    ChatRequest, GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError,
};
pub use telemetry::init_telemetry;
