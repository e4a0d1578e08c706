//! Error types for the Mixcraft library.
//!
//! This crate provides the foundation error types used throughout the
//! Mixcraft ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mixcraft_error::{MixcraftResult, HttpError};
//!
//! fn fetch_data() -> MixcraftResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod session;
mod transport;

pub use config::ConfigError;
pub use error::{MixcraftError, MixcraftErrorKind, MixcraftResult};
pub use http::HttpError;
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use transport::{TransportError, TransportErrorKind};
