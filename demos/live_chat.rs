// Live Chat Example: push-to-talk dictation into a conversation
//
// This example demonstrates the complete flow:
// 1. A scripted recognition backend stands in for the platform speech service
// 2. Press-in starts a listening session, press-out stops it
// 3. Partial results are reconciled into a live transcript (watch the
//    segment commit when the recognizer restarts its buffer)
// 4. The finished transcript is sent into the conversation
//
// Usage: cargo run --example live_chat

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use voxchat::{
    Conversation, ListeningSession, MergeSemantics, RecognitionScript, RecognizerFactory,
    RecognizerOptions, RecognizerSource, ScriptStep, SessionConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("🎙️  Starting push-to-talk chat demo");

    // 1. Script a capture in which the recognizer restarts its internal
    // buffer after "hey how are you" — the reconciler keeps that segment.
    let script = RecognitionScript::new(vec![
        ScriptStep::partial(400, &["hey"]),
        ScriptStep::partial(300, &["hey how"]),
        ScriptStep::partial(300, &["hey how are you"]),
        ScriptStep::partial(500, &["doing today"]),
        ScriptStep::results(400, &["doing today"]),
    ]);

    let backend = RecognizerFactory::create(RecognizerSource::Scripted(script))?;

    let config = SessionConfig {
        merge: MergeSemantics::Segment,
        recognizer_options: RecognizerOptions {
            complete_silence_timeout_ms: 500,
            possibly_complete_silence_timeout_ms: 500,
        },
        ..SessionConfig::default()
    };

    let session = Arc::new(ListeningSession::new(config, backend));
    let mut conversation = Conversation::new();
    conversation.receive("hey, what are you up to?");

    // 2. Press in
    info!("👇 Button pressed");
    session.start().await?;

    // 3. Watch the live transcript while "holding the button"
    while session.is_listening() {
        sleep(Duration::from_millis(200)).await;
        info!("📝 Live transcript: {:?}", session.transcript().await);
    }

    // 4. Release (the scripted service already ended on silence, so this
    // is the tolerated duplicate-stop case)
    info!("👆 Button released");
    session.stop().await?;

    // 5. Send the dictated text
    let text = session.take_transcript().await;
    if let Some(message) = conversation.send(&text) {
        info!("📤 Sent: {:?}", message.text);
    }

    info!("");
    info!("💬 Conversation:");
    for message in conversation.messages() {
        info!("  [{:?}] {}", message.sender, message.text);
    }

    session.shutdown().await?;

    info!("🏁 Demo complete");

    Ok(())
}
