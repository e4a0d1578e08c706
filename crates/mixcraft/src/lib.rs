//! Mixcraft - AI Cocktail Recipe Client
//!
//! Mixcraft is a client library for an AI cocktail-recipe backend. Callers
//! supply ingredients, flavors, and dietary constraints; the backend answers
//! with a recipe, either in one buffered response or as a progressive event
//! stream that reveals the recipe piece by piece (name, description,
//! ingredients, instructions, tip, health rating, image).
//!
//! # Features
//!
//! - **Progressive streaming**: newline-delimited `data: <JSON>` events
//!   folded into a monotonically more complete draft
//! - **Buffered fallback**: a failed or incomplete stream transparently
//!   retries as a single request
//! - **Cancellation**: explicit, UI-independent session cancellation;
//!   starting a new generation supersedes the previous one
//! - **Per-event callbacks**: fine-grained hooks for each event kind
//! - **Recipe tools**: save/list/delete, recipe chat, image generation and
//!   ingredient photo analysis over the same backend
//!
//! # Quick Start
//!
//! ```no_run
//! use mixcraft::{ClientConfig, CocktailClient, GenerateCallbacks, GenerationRequest, Mixer, StaticToken};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CocktailClient::new(
//!         ClientConfig::new("https://api.example.com/api"),
//!         Arc::new(StaticToken::new(std::env::var("MIXCRAFT_API_TOKEN")?)),
//!     );
//!     let mixer = Mixer::new(Arc::new(client));
//!
//!     let request = GenerationRequest::builder()
//!         .ingredients(vec!["gin".to_string(), "lime".to_string()])
//!         .flavors(vec!["sour".to_string()])
//!         .build()?;
//!
//!     let callbacks = GenerateCallbacks::new()
//!         .on_status(|status| println!("{status}"))
//!         .on_name(|name| println!("mixing a {name}"));
//!
//!     let outcome = mixer.generate(request, callbacks).await?;
//!     if let Some(recipe) = outcome.recipe() {
//!         println!("{}: {}", recipe.name, recipe.description);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Mixcraft is organized as a workspace with focused crates:
//!
//! - `mixcraft_core` - data types and the recipe stream reducer
//! - `mixcraft_interface` - driver and capability traits
//! - `mixcraft_error` - error types
//! - `mixcraft_client` - HTTP transport, event parser, generation session
//!
//! This crate (`mixcraft`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use mixcraft_client::*;
pub use mixcraft_core::*;
pub use mixcraft_error::*;
pub use mixcraft_interface::*;
