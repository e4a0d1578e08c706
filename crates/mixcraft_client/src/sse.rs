//! Parsing of `data: <JSON>` event records from a chunked byte stream.

use futures::StreamExt;
use mixcraft_error::{MixcraftResult, TransportError, TransportErrorKind};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::pin::Pin;

/// Prefix of an event-bearing record line.
const EVENT_PREFIX: &str = "data: ";

/// Reassembles newline-delimited `data: <JSON>` records from arbitrarily
/// fragmented chunks.
///
/// The feed keeps a carry-over buffer of unterminated text: each chunk is
/// appended, every complete line is examined, and the trailing segment (which
/// may be an incomplete record) waits for the next chunk. Chunks may split a
/// record anywhere, including inside a multi-byte UTF-8 sequence.
///
/// Lines without the `data: ` prefix (keep-alives, comments) are ignored.
/// Records whose JSON fails to parse are skipped and logged at debug level;
/// a single bad record does not abort an otherwise healthy stream.
///
/// The feed is generic over the event type so the recipe stream and the chat
/// stream share it.
///
/// # Examples
///
/// ```
/// use mixcraft_client::SseFeed;
/// use mixcraft_core::RecipeEvent;
///
/// let mut feed = SseFeed::<RecipeEvent>::new();
/// assert!(feed.push("data: {\"type\":\"name\",").is_empty());
/// let events = feed.push("\"data\":\"Gin Fizz\"}\n");
/// assert_eq!(events, vec![RecipeEvent::Name("Gin Fizz".to_string())]);
/// ```
#[derive(Debug)]
pub struct SseFeed<E> {
    bytes: Vec<u8>,
    text: String,
    _event: PhantomData<E>,
}

impl<E: DeserializeOwned> SseFeed<E> {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            text: String::new(),
            _event: PhantomData,
        }
    }

    /// Feed a raw byte chunk and collect every completed event, in wire order.
    ///
    /// Bytes that do not yet form valid UTF-8 (a multi-byte character split
    /// across chunks) are held back until the remainder arrives; bytes that
    /// can never form valid UTF-8 are skipped like any other malformed input.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Vec<E> {
        self.bytes.extend_from_slice(chunk);

        let mut events = Vec::new();
        loop {
            let (valid, invalid) = match std::str::from_utf8(&self.bytes) {
                Ok(text) => (text.len(), None),
                Err(e) => (e.valid_up_to(), e.error_len()),
            };

            let decoded: Vec<u8> = self.bytes.drain(..valid).collect();
            let decoded = String::from_utf8(decoded).expect("validated UTF-8 prefix");
            events.extend(self.push(&decoded));

            match invalid {
                Some(skip) => {
                    tracing::debug!(bytes = skip, "Skipping invalid UTF-8 in stream");
                    self.bytes.drain(..skip);
                }
                None => break,
            }
        }
        events
    }

    /// Feed a text chunk and collect every completed event, in wire order.
    pub fn push(&mut self, chunk: &str) -> Vec<E> {
        self.text.push_str(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.text.find('\n') {
            let line: String = self.text.drain(..=pos).collect();
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(data) = line.strip_prefix(EVENT_PREFIX) else {
                continue;
            };

            match serde_json::from_str::<E>(data) {
                Ok(event) => events.push(event),
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        record_len = data.len(),
                        "Skipping malformed stream record"
                    );
                }
            }
        }
        events
    }
}

impl<E: DeserializeOwned> Default for SseFeed<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapt an HTTP response body into a stream of parsed events.
///
/// Transport failures mid-stream surface as `TransportError(Stream)` items;
/// the stream ends when the server closes the connection. No terminal event
/// is synthesized for premature termination — classifying an incomplete
/// stream is the session's responsibility.
pub fn event_stream<E>(
    response: reqwest::Response,
) -> Pin<Box<dyn futures::Stream<Item = MixcraftResult<E>> + Send>>
where
    E: DeserializeOwned + Send + 'static,
{
    let stream = async_stream::try_stream! {
        let mut feed = SseFeed::<E>::new();
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| {
                TransportError::new(TransportErrorKind::Stream(e.to_string()))
            })?;
            for event in feed.push_bytes(&chunk) {
                yield event;
            }
        }
    };

    Box::pin(stream)
}
