//! Trait definitions for the Mixcraft cocktail recipe client.
//!
//! This crate provides the core driver trait and the capability traits that
//! define the Mixcraft interface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Chat, CocktailDriver, ImageStudio, RecipeStore, Streaming};
pub use types::{ChatStream, EventStream};
