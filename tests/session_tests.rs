use std::time::Duration;
use voxchat::{
    ListeningSession, ListeningState, MergeSemantics, RecognitionScript, RecognizerFactory,
    RecognizerOptions, RecognizerSource, ScriptStep, SessionConfig,
};

fn scripted_session(steps: Vec<ScriptStep>, merge: MergeSemantics) -> ListeningSession {
    let script = RecognitionScript::new(steps);
    let backend = RecognizerFactory::create(RecognizerSource::Scripted(script)).unwrap();

    let config = SessionConfig {
        merge,
        recognizer_options: RecognizerOptions {
            complete_silence_timeout_ms: 30,
            possibly_complete_silence_timeout_ms: 30,
        },
        ..SessionConfig::default()
    };

    ListeningSession::new(config, backend)
}

async fn wait_until_idle(session: &ListeningSession) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while session.is_listening() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("session did not return to idle");
}

#[tokio::test]
async fn test_segment_partials_accumulate_across_buffer_reset() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["hello"]),
            ScriptStep::partial(5, &["hello world"]),
            ScriptStep::partial(5, &["there"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "hello worldthere");
    assert_eq!(session.state(), ListeningState::Idle);
}

#[tokio::test]
async fn test_replace_partials_overwrite() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["hi"]),
            ScriptStep::partial(5, &["hi there"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Replace,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "hi there");
}

#[tokio::test]
async fn test_start_resets_leftover_state() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["fresh words"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;
    assert_eq!(session.transcript().await, "fresh words");

    // Leave junk in the composer, then start a new capture: nothing from
    // the previous session may leak into the new transcript.
    session.set_transcript("junk left over").await;
    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "fresh words");
}

#[tokio::test]
async fn test_stop_while_idle_is_a_noop() {
    let session = scripted_session(vec![ScriptStep::ended(5)], MergeSemantics::Segment);

    assert_eq!(session.state(), ListeningState::Idle);
    session.stop().await.unwrap();
    assert_eq!(session.state(), ListeningState::Idle);
}

#[tokio::test]
async fn test_duplicate_start_is_ignored() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(20, &["still talking"]),
            ScriptStep::ended(10),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    assert_eq!(session.state(), ListeningState::Listening);

    // Overlapping press gesture: second start must not disturb the capture
    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "still talking");
}

#[tokio::test]
async fn test_stop_mid_capture_keeps_partial_transcript() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["first bit"]),
            ScriptStep::partial(500, &["first bit and more"]),
            ScriptStep::ended(10),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    session.stop().await.unwrap();

    assert_eq!(session.state(), ListeningState::Idle);
    assert_eq!(session.transcript().await, "first bit");
}

#[tokio::test]
async fn test_service_driven_end_returns_to_idle() {
    // The script never stops explicitly; the service's silence timeout ends
    // the capture on its own.
    let session = scripted_session(
        vec![ScriptStep::partial(5, &["short utterance"])],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.state(), ListeningState::Idle);
    assert_eq!(session.transcript().await, "short utterance");
}

#[tokio::test]
async fn test_error_events_do_not_end_the_session() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["keep"]),
            ScriptStep::error(5, Some(7), "client side error"),
            ScriptStep::partial(5, &["keep going"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "keep going");
}

#[tokio::test]
async fn test_final_payload_does_not_override_transcript() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["what the user saw"]),
            ScriptStep::results(5, &["something else entirely"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "what the user saw");
}

#[tokio::test]
async fn test_empty_partial_events_are_ignored() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &[]),
            ScriptStep::partial(5, &["actual words"]),
            ScriptStep::partial(5, &[""]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.transcript().await, "actual words");
}

#[tokio::test]
async fn test_take_transcript_clears_the_composer() {
    let session = scripted_session(
        vec![ScriptStep::partial(5, &["send this"]), ScriptStep::ended(5)],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    assert_eq!(session.take_transcript().await, "send this");
    assert_eq!(session.transcript().await, "");
}

#[tokio::test]
async fn test_transcript_is_editable_while_idle() {
    let session = scripted_session(vec![ScriptStep::ended(5)], MergeSemantics::Segment);

    session.set_transcript("typed by hand").await;
    assert_eq!(session.transcript().await, "typed by hand");
}

#[tokio::test]
async fn test_stats_reflect_capture() {
    let session = scripted_session(
        vec![
            ScriptStep::partial(5, &["one"]),
            ScriptStep::partial(5, &["one two"]),
            ScriptStep::ended(5),
        ],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    wait_until_idle(&session).await;

    let stats = session.stats().await;
    assert!(!stats.listening);
    assert_eq!(stats.partial_events, 2);
    assert_eq!(stats.transcript_chars, "one two".chars().count());
}

#[tokio::test]
async fn test_shutdown_releases_the_backend() {
    let session = scripted_session(
        vec![ScriptStep::partial(50, &["cut short"])],
        MergeSemantics::Segment,
    );

    session.start().await.unwrap();
    session.shutdown().await.unwrap();

    assert_eq!(session.state(), ListeningState::Idle);
}
