//! HTTP client, event parser, and generation session for Mixcraft.
//!
//! The crate is organized around the streaming protocol core:
//!
//! - [`CocktailClient`] — the transport adapter: buffered and streaming
//!   requests against the cocktail backend.
//! - [`SseFeed`] — the event parser: reassembles `data: <JSON>` records from
//!   arbitrarily fragmented byte chunks.
//! - [`Mixer`] — the generation session: streaming-first orchestration with
//!   buffered fallback, per-event callbacks, and explicit cancellation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod client;
mod config;
mod session;
mod sse;

pub use auth::{StaticToken, TokenProvider};
pub use client::CocktailClient;
pub use config::ClientConfig;
pub use session::{GenerateCallbacks, Mixer, SessionOutcome, SessionPhase};
pub use sse::{event_stream, SseFeed};
