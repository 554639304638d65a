use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use voxchat::recognizer::{self, RecognitionScript, RecognizerFactory, RecognizerSource};
use voxchat::{create_router, AppState, Config, ListeningSession, RecognizerOptions, SessionConfig};

/// Push-to-talk chat service with live speech transcription
#[derive(Debug, Parser)]
#[command(name = "voxchat", version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config/voxchat")]
    config: String,

    /// Override the recognition locale from the config file
    #[arg(long)]
    locale: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("voxchat v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );

    let locale = cli.locale.unwrap_or_else(|| cfg.recognizer.locale.clone());

    // Scripted backend when a script is configured, the host platform's
    // speech service otherwise.
    let source = match &cfg.recognizer.script_path {
        Some(path) => RecognizerSource::Scripted(RecognitionScript::from_file(path)?),
        None => RecognizerSource::Native,
    };
    let backend = RecognizerFactory::create(source)?;
    recognizer::log_startup_diagnostics(backend.as_ref());

    let session_config = SessionConfig {
        locale,
        recognizer_options: RecognizerOptions {
            complete_silence_timeout_ms: cfg.recognizer.complete_silence_timeout_ms,
            possibly_complete_silence_timeout_ms: cfg.recognizer.possibly_complete_silence_timeout_ms,
        },
        merge: cfg.transcript.merge,
        ..SessionConfig::default()
    };

    let session = Arc::new(ListeningSession::new(session_config, backend));
    let state = AppState::new(Arc::clone(&session));
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;

    session.shutdown().await?;

    Ok(())
}
