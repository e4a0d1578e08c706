// Mock backend driver for session tests.
//
// Scripted per-call behavior for both the streaming and the buffered path,
// with call counters, so session orchestration can be validated without a
// network.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use mixcraft_client::GenerateCallbacks;
use mixcraft_core::{GenerationRequest, Recipe, RecipeEvent};
use mixcraft_error::{MixcraftError, MixcraftResult, TransportError, TransportErrorKind};
use mixcraft_interface::{CocktailDriver, EventStream, Streaming};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted answer to a `generate_stream` call.
#[allow(dead_code)]
pub enum StreamPlan {
    /// Opening the stream fails outright
    FailToOpen,
    /// Yield the events, then close cleanly
    Events(Vec<RecipeEvent>),
    /// Yield the events, then stay open forever
    EventsThenHang(Vec<RecipeEvent>),
    /// Yield the events, then fail mid-stream
    EventsThenTransportError(Vec<RecipeEvent>, String),
    /// Yield the events, then one more after a delay
    EventsThenLateEvent {
        first: Vec<RecipeEvent>,
        late: RecipeEvent,
        delay: Duration,
    },
}

/// One scripted answer to a buffered `generate` call.
#[allow(dead_code)]
pub enum BufferedPlan {
    Recipe(Recipe),
    Rejected { code: String, message: String },
}

/// Scripted mock backend.
#[derive(Default)]
pub struct MockDriver {
    streams: Mutex<VecDeque<StreamPlan>>,
    buffered: Mutex<VecDeque<BufferedPlan>>,
    stream_calls: AtomicUsize,
    buffered_calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream(self, plan: StreamPlan) -> Self {
        self.streams.lock().unwrap().push_back(plan);
        self
    }

    pub fn with_buffered(self, plan: BufferedPlan) -> Self {
        self.buffered.lock().unwrap().push_back(plan);
        self
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }

    pub fn buffered_calls(&self) -> usize {
        self.buffered_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CocktailDriver for MockDriver {
    async fn generate(&self, _req: &GenerationRequest) -> MixcraftResult<Recipe> {
        self.buffered_calls.fetch_add(1, Ordering::SeqCst);
        match self.buffered.lock().unwrap().pop_front() {
            Some(BufferedPlan::Recipe(recipe)) => Ok(recipe),
            Some(BufferedPlan::Rejected { code, message }) => {
                Err(TransportError::new(TransportErrorKind::Rejected { code, message }).into())
            }
            None => Err(TransportError::new(TransportErrorKind::Unavailable(
                "no buffered plan scripted".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl Streaming for MockDriver {
    async fn generate_stream(&self, _req: &GenerationRequest) -> MixcraftResult<EventStream> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        let plan = self.streams.lock().unwrap().pop_front();

        match plan {
            None | Some(StreamPlan::FailToOpen) => Err(TransportError::new(
                TransportErrorKind::Unavailable("connection refused".to_string()),
            )
            .into()),
            Some(StreamPlan::Events(events)) => Ok(Box::pin(stream::iter(
                events.into_iter().map(Ok::<_, MixcraftError>),
            ))),
            Some(StreamPlan::EventsThenHang(events)) => Ok(Box::pin(
                stream::iter(events.into_iter().map(Ok::<_, MixcraftError>))
                    .chain(stream::pending()),
            )),
            Some(StreamPlan::EventsThenTransportError(events, message)) => {
                let failure: MixcraftError =
                    TransportError::new(TransportErrorKind::Stream(message)).into();
                Ok(Box::pin(stream::iter(
                    events
                        .into_iter()
                        .map(Ok::<_, MixcraftError>)
                        .chain(std::iter::once(Err(failure))),
                )))
            }
            Some(StreamPlan::EventsThenLateEvent { first, late, delay }) => {
                let head = stream::iter(first.into_iter().map(Ok::<_, MixcraftError>));
                let tail = stream::once(async move {
                    tokio::time::sleep(delay).await;
                    Ok::<_, MixcraftError>(late)
                });
                Ok(Box::pin(head.chain(tail)))
            }
        }
    }
}

/// Records every callback invocation for later assertions.
#[derive(Default)]
pub struct Recorder {
    pub statuses: Mutex<Vec<String>>,
    pub names: Mutex<Vec<String>>,
    pub ingredients: Mutex<Vec<Vec<String>>>,
    pub dones: Mutex<Vec<Recipe>>,
    pub errors: Mutex<Vec<String>>,
    pub total: AtomicUsize,
}

#[allow(dead_code)]
impl Recorder {
    pub fn callbacks(self: Arc<Self>) -> GenerateCallbacks {
        let statuses = self.clone();
        let names = self.clone();
        let ingredients = self.clone();
        let dones = self.clone();
        let errors = self;

        GenerateCallbacks::new()
            .on_status(move |status| {
                statuses.statuses.lock().unwrap().push(status.to_string());
                statuses.total.fetch_add(1, Ordering::SeqCst);
            })
            .on_name(move |name| {
                names.names.lock().unwrap().push(name.to_string());
                names.total.fetch_add(1, Ordering::SeqCst);
            })
            .on_ingredients(move |list| {
                ingredients.ingredients.lock().unwrap().push(list.to_vec());
                ingredients.total.fetch_add(1, Ordering::SeqCst);
            })
            .on_done(move |recipe| {
                dones.dones.lock().unwrap().push(recipe.clone());
                dones.total.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |message| {
                errors.errors.lock().unwrap().push(message.to_string());
                errors.total.fetch_add(1, Ordering::SeqCst);
            })
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

/// The recipe used as the scripted `done` payload.
#[allow(dead_code)]
pub fn sample_recipe() -> Recipe {
    Recipe {
        name: "Gin Fizz".to_string(),
        description: "A bright, fizzy classic".to_string(),
        ingredients: vec!["gin".to_string(), "lime".to_string(), "soda".to_string()],
        instructions: vec!["shake".to_string(), "pour".to_string()],
        tip: Some("Use fresh lime".to_string()),
        health_rating: Some(4),
        health_notes: Some("Sugar from the soda".to_string()),
        image_url: Some("http://x/img.png".to_string()),
        cocktail_id: Some("ck-123".to_string()),
    }
}

/// A generation request with something in every field the tests care about.
#[allow(dead_code)]
pub fn sample_request() -> GenerationRequest {
    GenerationRequest::builder()
        .ingredients(vec!["gin".to_string(), "lime".to_string()])
        .flavors(vec!["sour".to_string()])
        .build()
        .expect("valid request")
}
