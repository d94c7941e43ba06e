use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use transcript_relay::application::services::TranscriptionService;
use transcript_relay::infrastructure::observability::{TracingConfig, init_tracing};
use transcript_relay::infrastructure::speech::{SpeechProviderFactory, SpeechProviderKind};
use transcript_relay::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    let tracing_config = TracingConfig::from_settings(settings.environment, &settings.logging);
    init_tracing(&tracing_config, settings.server.port);

    let provider = SpeechProviderFactory::create(
        SpeechProviderKind::from_scaffold(&settings.scaffold),
        &settings.provider,
        &settings.scaffold,
    )?;

    let polling = settings.polling.policy();
    tracing::info!(
        interval_ms = polling.interval.as_millis() as u64,
        max_attempts = polling.max_attempts,
        budget_secs = polling.budget().as_secs(),
        language_code = %settings.provider.language_code,
        "Polling policy configured"
    );

    let transcription_service = Arc::new(TranscriptionService::new(
        provider,
        settings.provider.language_code.clone(),
        polling,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let router = create_router(AppState::new(transcription_service, settings));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
