//! The generation session: streaming-first orchestration with buffered
//! fallback, per-event callbacks, and explicit cancellation.

use futures::StreamExt;
use mixcraft_core::{
    GenerationRequest, HealthInfo, Recipe, RecipeDraft, RecipeEvent, RecipeFold, Step,
};
use mixcraft_error::{MixcraftError, MixcraftErrorKind, MixcraftResult, SessionError, SessionErrorKind, TransportErrorKind};
use mixcraft_interface::Streaming;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::instrument;

/// A registered per-event callback.
type EventHook<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Where a generation session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SessionPhase {
    /// No generation started yet
    Idle,
    /// Consuming the event stream
    Streaming,
    /// Stream abandoned; buffered request in flight
    FallingBack,
    /// Resolved with a complete recipe
    Succeeded,
    /// Terminally failed
    Failed,
    /// Cancelled by the caller or superseded by a newer session
    Cancelled,
}

/// What a generation resolved to.
///
/// Cancellation is not an error: a cancelled session resolves with
/// [`SessionOutcome::Cancelled`] so callers can distinguish "user cancelled"
/// from "generation failed".
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The session produced a complete recipe
    Complete(Recipe),
    /// The session was cancelled before completing
    Cancelled,
}

impl SessionOutcome {
    /// The recipe, when the session completed.
    pub fn recipe(self) -> Option<Recipe> {
        match self {
            SessionOutcome::Complete(recipe) => Some(recipe),
            SessionOutcome::Cancelled => None,
        }
    }

    /// Whether the session was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SessionOutcome::Cancelled)
    }
}

/// Optional per-event-kind callbacks for fine-grained UI updates.
///
/// Each callback is independent; register only the ones you need.
///
/// # Examples
///
/// ```
/// use mixcraft_client::GenerateCallbacks;
///
/// let callbacks = GenerateCallbacks::new()
///     .on_name(|name| println!("name: {name}"))
///     .on_status(|status| println!("{status}"));
/// ```
#[derive(Default)]
pub struct GenerateCallbacks {
    on_status: Option<EventHook<str>>,
    on_name: Option<EventHook<str>>,
    on_description: Option<EventHook<str>>,
    on_ingredients: Option<EventHook<[String]>>,
    on_instructions: Option<EventHook<[String]>>,
    on_tip: Option<EventHook<str>>,
    on_health: Option<EventHook<HealthInfo>>,
    on_complete: Option<EventHook<RecipeDraft>>,
    on_image: Option<EventHook<str>>,
    on_done: Option<EventHook<Recipe>>,
    on_error: Option<EventHook<str>>,
}

impl GenerateCallbacks {
    /// No callbacks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on each `status` event with the progress text.
    pub fn on_status(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_status = Some(Box::new(f));
        self
    }

    /// Called when the cocktail name arrives.
    pub fn on_name(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_name = Some(Box::new(f));
        self
    }

    /// Called when the description arrives.
    pub fn on_description(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_description = Some(Box::new(f));
        self
    }

    /// Called with the full current ingredient list.
    pub fn on_ingredients(mut self, f: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        self.on_ingredients = Some(Box::new(f));
        self
    }

    /// Called with the full current instruction list.
    pub fn on_instructions(mut self, f: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        self.on_instructions = Some(Box::new(f));
        self
    }

    /// Called when the bartender's tip arrives.
    pub fn on_tip(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_tip = Some(Box::new(f));
        self
    }

    /// Called when the health assessment arrives.
    pub fn on_health(mut self, f: impl Fn(&HealthInfo) + Send + Sync + 'static) -> Self {
        self.on_health = Some(Box::new(f));
        self
    }

    /// Called when the backend marks the recipe text finalized.
    pub fn on_complete(mut self, f: impl Fn(&RecipeDraft) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Called when the generated image URL arrives.
    pub fn on_image(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_image = Some(Box::new(f));
        self
    }

    /// Called with the final recipe, from either path.
    pub fn on_done(mut self, f: impl Fn(&Recipe) + Send + Sync + 'static) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    /// Called with advisory or terminal failure text.
    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    fn dispatch(&self, event: &RecipeEvent) {
        match event {
            RecipeEvent::Status(text) => {
                if let Some(f) = &self.on_status {
                    f(text);
                }
            }
            RecipeEvent::Name(name) => {
                if let Some(f) = &self.on_name {
                    f(name);
                }
            }
            RecipeEvent::Description(description) => {
                if let Some(f) = &self.on_description {
                    f(description);
                }
            }
            RecipeEvent::Ingredients(ingredients) => {
                if let Some(f) = &self.on_ingredients {
                    f(ingredients);
                }
            }
            RecipeEvent::Instructions(instructions) => {
                if let Some(f) = &self.on_instructions {
                    f(instructions);
                }
            }
            RecipeEvent::Tip(tip) => {
                if let Some(f) = &self.on_tip {
                    f(tip);
                }
            }
            RecipeEvent::Health(health) => {
                if let Some(f) = &self.on_health {
                    f(health);
                }
            }
            RecipeEvent::Complete(patch) => {
                if let Some(f) = &self.on_complete {
                    f(patch);
                }
            }
            RecipeEvent::Image(url) => {
                if let Some(f) = &self.on_image {
                    f(url);
                }
            }
            RecipeEvent::Done(recipe) => {
                if let Some(f) = &self.on_done {
                    f(recipe);
                }
            }
            RecipeEvent::Error(message) => {
                if let Some(f) = &self.on_error {
                    f(message);
                }
            }
        }
    }
}

impl std::fmt::Debug for GenerateCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateCallbacks").finish_non_exhaustive()
    }
}

/// Shared live state of one session, readable by the rendering layer.
struct SessionShared {
    cancel: CancellationToken,
    fold: Mutex<RecipeFold>,
    phase: Mutex<SessionPhase>,
}

impl SessionShared {
    fn idle() -> Arc<Self> {
        Arc::new(Self {
            cancel: CancellationToken::new(),
            fold: Mutex::new(RecipeFold::new()),
            phase: Mutex::new(SessionPhase::Idle),
        })
    }

    fn fresh() -> Arc<Self> {
        Arc::new(Self {
            cancel: CancellationToken::new(),
            fold: Mutex::new(RecipeFold::new()),
            phase: Mutex::new(SessionPhase::Streaming),
        })
    }

    /// Move to a new phase unless the session has been cancelled.
    fn set_phase(&self, phase: SessionPhase) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        *self.phase.lock().unwrap() = phase;
        true
    }

    /// Mark the session cancelled and discard its partial draft.
    fn settle_cancelled(&self) {
        *self.phase.lock().unwrap() = SessionPhase::Cancelled;
        *self.fold.lock().unwrap() = RecipeFold::new();
    }
}

/// How the streaming attempt ended.
enum StreamVerdict {
    /// Explicit `done` event observed
    Succeeded(Recipe),
    /// Explicit `error` event observed; no fallback
    ServerReported(String),
    /// Stream unusable or incomplete; eligible for fallback
    Abandoned(String),
    /// Cancellation observed
    Cancelled,
}

/// Orchestrates recipe generations against a streaming-capable backend.
///
/// One `Mixer` manages one logical "generate" surface: starting a new
/// generation implicitly cancels any prior one still in flight, and the
/// superseded session's callbacks never fire again. The rendering layer can
/// poll [`phase`](Mixer::phase), [`draft`](Mixer::draft), and
/// [`status`](Mixer::status) for snapshots of the active session.
///
/// # Examples
///
/// ```no_run
/// use mixcraft_client::{ClientConfig, CocktailClient, GenerateCallbacks, Mixer, StaticToken};
/// use mixcraft_core::GenerationRequest;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CocktailClient::new(
///     ClientConfig::new("https://api.example.com/api"),
///     Arc::new(StaticToken::none()),
/// );
/// let mixer = Mixer::new(Arc::new(client));
///
/// let request = GenerationRequest::builder()
///     .ingredients(vec!["gin".to_string(), "lime".to_string()])
///     .build()?;
/// let callbacks = GenerateCallbacks::new().on_name(|name| println!("mixing a {name}"));
///
/// let outcome = mixer.generate(request, callbacks).await?;
/// if let Some(recipe) = outcome.recipe() {
///     println!("done: {}", recipe.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Mixer {
    driver: Arc<dyn Streaming>,
    current: Mutex<Arc<SessionShared>>,
}

impl Mixer {
    /// Create a mixer over the given backend driver.
    pub fn new(driver: Arc<dyn Streaming>) -> Self {
        Self {
            driver,
            current: Mutex::new(SessionShared::idle()),
        }
    }

    /// The active session's phase.
    pub fn phase(&self) -> SessionPhase {
        *self.current.lock().unwrap().phase.lock().unwrap()
    }

    /// Snapshot of the active session's partial recipe.
    pub fn draft(&self) -> RecipeDraft {
        self.current.lock().unwrap().fold.lock().unwrap().draft().clone()
    }

    /// The active session's latest status text.
    pub fn status(&self) -> String {
        self.current.lock().unwrap().fold.lock().unwrap().status().to_string()
    }

    /// Cancel the active session.
    ///
    /// The in-flight network operation is aborted and no further callbacks
    /// fire. A no-op when nothing is in flight.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        let current = self.current.lock().unwrap();
        let phase = *current.phase.lock().unwrap();
        if matches!(phase, SessionPhase::Streaming | SessionPhase::FallingBack) {
            current.cancel.cancel();
            current.settle_cancelled();
            tracing::debug!("Session cancelled");
        }
    }

    /// Run one generation to completion.
    ///
    /// Opens the event stream and folds events into the live draft, invoking
    /// the registered callbacks as each arrives. When the stream cannot be
    /// opened, drops mid-way, or ends without a terminal event, the session
    /// falls back to a single buffered request after firing `on_error` with
    /// an advisory message. An explicit `error` event is final; no fallback
    /// is attempted for it.
    #[instrument(skip(self, request, callbacks))]
    pub async fn generate(
        &self,
        request: GenerationRequest,
        callbacks: GenerateCallbacks,
    ) -> MixcraftResult<SessionOutcome> {
        let shared = SessionShared::fresh();
        {
            let mut current = self.current.lock().unwrap();
            // Starting a new session supersedes any prior active one.
            current.cancel.cancel();
            *current = shared.clone();
        }

        run_session(self.driver.clone(), shared, request, callbacks).await
    }
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer").field("phase", &self.phase()).finish_non_exhaustive()
    }
}

async fn run_session(
    driver: Arc<dyn Streaming>,
    shared: Arc<SessionShared>,
    request: GenerationRequest,
    callbacks: GenerateCallbacks,
) -> MixcraftResult<SessionOutcome> {
    let verdict = tokio::select! {
        _ = shared.cancel.cancelled() => StreamVerdict::Cancelled,
        opened = driver.generate_stream(&request) => match opened {
            Ok(stream) => drive_stream(stream, &shared, &callbacks).await,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open event stream");
                StreamVerdict::Abandoned(failure_message(&e))
            }
        },
    };

    match verdict {
        StreamVerdict::Cancelled => {
            shared.settle_cancelled();
            Ok(SessionOutcome::Cancelled)
        }
        StreamVerdict::Succeeded(recipe) => {
            shared.set_phase(SessionPhase::Succeeded);
            Ok(SessionOutcome::Complete(recipe))
        }
        StreamVerdict::ServerReported(message) => {
            tracing::error!(%message, "Backend reported generation failure");
            shared.set_phase(SessionPhase::Failed);
            Err(SessionError::new(SessionErrorKind::ServerReported(message)).into())
        }
        StreamVerdict::Abandoned(reason) => {
            fall_back(driver, shared, request, callbacks, reason).await
        }
    }
}

/// Consume the event stream until a terminal condition.
async fn drive_stream(
    mut stream: mixcraft_interface::EventStream,
    shared: &SessionShared,
    callbacks: &GenerateCallbacks,
) -> StreamVerdict {
    loop {
        let next = tokio::select! {
            _ = shared.cancel.cancelled() => return StreamVerdict::Cancelled,
            next = stream.next() => next,
        };

        let event = match next {
            None => {
                // Only an explicit `done` resolves a session; a clean close
                // without one is incomplete.
                return StreamVerdict::Abandoned(
                    "stream ended without a terminal event".to_string(),
                );
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Event stream failed mid-way");
                return StreamVerdict::Abandoned(failure_message(&e));
            }
            Some(Ok(event)) => event,
        };

        if shared.cancel.is_cancelled() {
            return StreamVerdict::Cancelled;
        }

        let step = shared.fold.lock().unwrap().apply(&event);
        if step == Step::Ignored {
            continue;
        }
        callbacks.dispatch(&event);

        match event {
            RecipeEvent::Done(recipe) => return StreamVerdict::Succeeded(recipe),
            RecipeEvent::Error(message) => return StreamVerdict::ServerReported(message),
            _ => {}
        }
    }
}

/// Retry via the buffered path after the stream proved unusable.
///
/// The partial draft is discarded; the buffered request starts fresh.
async fn fall_back(
    driver: Arc<dyn Streaming>,
    shared: Arc<SessionShared>,
    request: GenerationRequest,
    callbacks: GenerateCallbacks,
    reason: String,
) -> MixcraftResult<SessionOutcome> {
    if !shared.set_phase(SessionPhase::FallingBack) {
        shared.settle_cancelled();
        return Ok(SessionOutcome::Cancelled);
    }

    tracing::warn!(%reason, "Falling back to buffered generation");
    if let Some(f) = &callbacks.on_error {
        f("Streaming unavailable, retrying with a single request");
    }

    let buffered = tokio::select! {
        _ = shared.cancel.cancelled() => {
            shared.settle_cancelled();
            return Ok(SessionOutcome::Cancelled);
        }
        buffered = driver.generate(&request) => buffered,
    };

    if shared.cancel.is_cancelled() {
        shared.settle_cancelled();
        return Ok(SessionOutcome::Cancelled);
    }

    match buffered {
        Ok(recipe) => {
            let mut fold = shared.fold.lock().unwrap();
            *fold = RecipeFold::new();
            fold.apply(&RecipeEvent::Done(recipe.clone()));
            drop(fold);

            if let Some(f) = &callbacks.on_done {
                f(&recipe);
            }
            shared.set_phase(SessionPhase::Succeeded);
            Ok(SessionOutcome::Complete(recipe))
        }
        Err(e) => {
            let buffered_reason = failure_message(&e);
            tracing::error!(stream = %reason, buffered = %buffered_reason, "Both generation paths failed");
            shared.set_phase(SessionPhase::Failed);
            Err(SessionError::new(SessionErrorKind::Exhausted {
                stream: reason,
                buffered: buffered_reason,
            })
            .into())
        }
    }
}

/// The user-facing reason inside an error, without the location wrapper.
fn failure_message(error: &MixcraftError) -> String {
    match error.kind() {
        MixcraftErrorKind::Transport(transport) => match &transport.kind {
            TransportErrorKind::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        },
        MixcraftErrorKind::Http(http) => http.message.clone(),
        other => other.to_string(),
    }
}
