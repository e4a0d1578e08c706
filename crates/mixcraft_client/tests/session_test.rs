// Session orchestration tests using the scripted mock driver.
//
// These validate the streaming-first state machine: terminal resolution,
// buffered fallback, cancellation, and session supersession, all without a
// network.

mod test_utils;

use mixcraft_client::{Mixer, SessionOutcome, SessionPhase};
use mixcraft_core::{RecipeDraft, RecipeEvent};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{sample_recipe, sample_request, BufferedPlan, MockDriver, Recorder, StreamPlan};

fn happy_path_events() -> Vec<RecipeEvent> {
    vec![
        RecipeEvent::Status("Mixing...".to_string()),
        RecipeEvent::Name("Gin Fizz".to_string()),
        RecipeEvent::Ingredients(vec![
            "gin".to_string(),
            "lime".to_string(),
            "soda".to_string(),
        ]),
        RecipeEvent::Instructions(vec!["shake".to_string(), "pour".to_string()]),
        RecipeEvent::Complete(RecipeDraft::default()),
        RecipeEvent::Image("http://x/img.png".to_string()),
        RecipeEvent::Done(sample_recipe()),
    ]
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..400 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}

#[tokio::test]
async fn streamed_generation_resolves_with_the_done_payload() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new().with_stream(StreamPlan::Events(happy_path_events())));
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let outcome = mixer.generate(sample_request(), recorder.clone().callbacks()).await?;

    assert_eq!(outcome, SessionOutcome::Complete(sample_recipe()));
    assert_eq!(mixer.phase(), SessionPhase::Succeeded);
    assert_eq!(driver.buffered_calls(), 0);

    assert_eq!(*recorder.statuses.lock().unwrap(), vec!["Mixing...".to_string()]);
    assert_eq!(*recorder.names.lock().unwrap(), vec!["Gin Fizz".to_string()]);
    assert_eq!(recorder.dones.lock().unwrap().len(), 1);
    assert!(recorder.errors.lock().unwrap().is_empty());

    // The exposed draft reflects the done payload.
    assert_eq!(mixer.draft().name.as_deref(), Some("Gin Fizz"));
    Ok(())
}

#[tokio::test]
async fn open_failure_falls_back_to_buffered() -> anyhow::Result<()> {
    let driver = Arc::new(
        MockDriver::new()
            .with_stream(StreamPlan::FailToOpen)
            .with_buffered(BufferedPlan::Recipe(sample_recipe())),
    );
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let outcome = mixer.generate(sample_request(), recorder.clone().callbacks()).await?;

    assert_eq!(outcome, SessionOutcome::Complete(sample_recipe()));
    assert_eq!(driver.buffered_calls(), 1);
    assert_eq!(mixer.phase(), SessionPhase::Succeeded);

    // One advisory before the fallback, then the final recipe.
    assert_eq!(recorder.errors.lock().unwrap().len(), 1);
    assert_eq!(recorder.dones.lock().unwrap().len(), 1);
    assert!(recorder.names.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn stream_ending_without_done_falls_back() -> anyhow::Result<()> {
    let driver = Arc::new(
        MockDriver::new()
            .with_stream(StreamPlan::Events(vec![
                RecipeEvent::Status("Mixing...".to_string()),
                RecipeEvent::Name("Gin Fizz".to_string()),
            ]))
            .with_buffered(BufferedPlan::Recipe(sample_recipe())),
    );
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let outcome = mixer.generate(sample_request(), recorder.clone().callbacks()).await?;

    assert_eq!(outcome, SessionOutcome::Complete(sample_recipe()));
    assert_eq!(driver.buffered_calls(), 1);
    assert_eq!(recorder.errors.lock().unwrap().len(), 1);
    assert_eq!(recorder.dones.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn midstream_transport_failure_falls_back() -> anyhow::Result<()> {
    let driver = Arc::new(
        MockDriver::new()
            .with_stream(StreamPlan::EventsThenTransportError(
                vec![RecipeEvent::Name("Gin Fizz".to_string())],
                "connection reset".to_string(),
            ))
            .with_buffered(BufferedPlan::Recipe(sample_recipe())),
    );
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let outcome = mixer.generate(sample_request(), recorder.clone().callbacks()).await?;

    assert_eq!(outcome, SessionOutcome::Complete(sample_recipe()));
    assert_eq!(driver.buffered_calls(), 1);
    assert_eq!(*recorder.names.lock().unwrap(), vec!["Gin Fizz".to_string()]);
    Ok(())
}

#[tokio::test]
async fn fallback_failure_surfaces_the_server_message() {
    let driver = Arc::new(
        MockDriver::new()
            .with_stream(StreamPlan::Events(vec![RecipeEvent::Status(
                "Mixing...".to_string(),
            )]))
            .with_buffered(BufferedPlan::Rejected {
                code: "99".to_string(),
                message: "rate limited".to_string(),
            }),
    );
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let error = mixer
        .generate(sample_request(), recorder.clone().callbacks())
        .await
        .expect_err("both paths failed");

    assert!(error.to_string().contains("rate limited"), "{error}");
    assert_eq!(driver.buffered_calls(), 1);
    assert_eq!(mixer.phase(), SessionPhase::Failed);
    // Only the fallback advisory fired; the terminal failure is the returned error.
    assert_eq!(recorder.errors.lock().unwrap().len(), 1);
    assert!(recorder.dones.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_error_event_does_not_fall_back() {
    let driver = Arc::new(MockDriver::new().with_stream(StreamPlan::Events(vec![
        RecipeEvent::Name("Gin Fizz".to_string()),
        RecipeEvent::Error("the model refused".to_string()),
    ])));
    let mixer = Mixer::new(driver.clone());
    let recorder = Arc::new(Recorder::default());

    let error = mixer
        .generate(sample_request(), recorder.clone().callbacks())
        .await
        .expect_err("server reported failure");

    assert!(error.to_string().contains("the model refused"), "{error}");
    assert_eq!(driver.buffered_calls(), 0);
    assert_eq!(mixer.phase(), SessionPhase::Failed);
    assert_eq!(
        *recorder.errors.lock().unwrap(),
        vec!["the model refused".to_string()]
    );
}

#[tokio::test]
async fn cancellation_suppresses_further_callbacks() {
    let driver = Arc::new(MockDriver::new().with_stream(StreamPlan::EventsThenLateEvent {
        first: vec![
            RecipeEvent::Status("Mixing...".to_string()),
            RecipeEvent::Name("Gin Fizz".to_string()),
        ],
        late: RecipeEvent::Name("Late Arrival".to_string()),
        delay: Duration::from_millis(200),
    }));
    let mixer = Arc::new(Mixer::new(driver.clone()));
    let recorder = Arc::new(Recorder::default());

    let task = {
        let mixer = mixer.clone();
        let callbacks = recorder.clone().callbacks();
        tokio::spawn(async move { mixer.generate(sample_request(), callbacks).await })
    };

    {
        let recorder = recorder.clone();
        wait_until(move || !recorder.names.lock().unwrap().is_empty()).await;
    }
    mixer.cancel();

    let outcome = task.await.expect("task not aborted").expect("not an error");
    assert!(outcome.is_cancelled());
    assert_eq!(mixer.phase(), SessionPhase::Cancelled);

    // Nothing fires after cancellation, even once the late event's delay passes.
    let seen = recorder.total();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(recorder.total(), seen);
    assert_eq!(*recorder.names.lock().unwrap(), vec!["Gin Fizz".to_string()]);
    assert!(recorder.dones.lock().unwrap().is_empty());
    assert!(recorder.errors.lock().unwrap().is_empty());
    assert_eq!(driver.buffered_calls(), 0);

    // The cancelled session's partial draft is discarded.
    assert!(mixer.draft().is_empty());
}

#[tokio::test]
async fn starting_a_new_session_supersedes_the_previous_one() -> anyhow::Result<()> {
    let driver = Arc::new(
        MockDriver::new()
            .with_stream(StreamPlan::EventsThenHang(vec![RecipeEvent::Name(
                "First Draft".to_string(),
            )]))
            .with_stream(StreamPlan::Events(happy_path_events())),
    );
    let mixer = Arc::new(Mixer::new(driver.clone()));
    let first_recorder = Arc::new(Recorder::default());
    let second_recorder = Arc::new(Recorder::default());

    let first = {
        let mixer = mixer.clone();
        let callbacks = first_recorder.clone().callbacks();
        tokio::spawn(async move { mixer.generate(sample_request(), callbacks).await })
    };

    {
        let first_recorder = first_recorder.clone();
        wait_until(move || !first_recorder.names.lock().unwrap().is_empty()).await;
    }

    let outcome = mixer
        .generate(sample_request(), second_recorder.clone().callbacks())
        .await?;
    assert_eq!(outcome, SessionOutcome::Complete(sample_recipe()));
    assert_eq!(mixer.phase(), SessionPhase::Succeeded);

    let first_outcome = first.await.expect("task not aborted").expect("not an error");
    assert!(first_outcome.is_cancelled());

    // The superseded session never fired again; only the new session's final
    // state reached the rendering layer.
    assert_eq!(
        *first_recorder.names.lock().unwrap(),
        vec!["First Draft".to_string()]
    );
    assert!(first_recorder.dones.lock().unwrap().is_empty());
    assert_eq!(second_recorder.dones.lock().unwrap().len(), 1);
    assert_eq!(mixer.draft().name.as_deref(), Some("Gin Fizz"));
    Ok(())
}

#[tokio::test]
async fn cancel_before_any_generation_is_a_noop() {
    let driver = Arc::new(MockDriver::new());
    let mixer = Mixer::new(driver);

    assert_eq!(mixer.phase(), SessionPhase::Idle);
    mixer.cancel();
    assert_eq!(mixer.phase(), SessionPhase::Idle);
}
