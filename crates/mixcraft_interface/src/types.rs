//! Stream type aliases for the Mixcraft interface.

use futures_util::stream::Stream;
use mixcraft_core::{ChatEvent, RecipeEvent};
use mixcraft_error::MixcraftResult;
use std::pin::Pin;

/// A parsed recipe event stream.
///
/// Yields events in wire order until the connection closes or the stream is
/// dropped. Dropping the stream aborts the underlying connection.
pub type EventStream = Pin<Box<dyn Stream<Item = MixcraftResult<RecipeEvent>> + Send>>;

/// A parsed chat event stream.
pub type ChatStream = Pin<Box<dyn Stream<Item = MixcraftResult<ChatEvent>> + Send>>;
