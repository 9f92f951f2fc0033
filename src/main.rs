use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use multimodal_proxy::application::ports::{InteractionRepository, UploadStaging};
use multimodal_proxy::application::services::{QueryService, TranscriptionService};
use multimodal_proxy::infrastructure::llm::GeminiClient;
use multimodal_proxy::infrastructure::observability::{TracingConfig, init_tracing};
use multimodal_proxy::infrastructure::persistence::InMemoryInteractionRepository;
use multimodal_proxy::infrastructure::storage::LocalUploadStaging;
use multimodal_proxy::infrastructure::transcription::AssemblyAiProvider;
use multimodal_proxy::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::new(environment.as_str(), settings.logging.json)
            .with_directives(settings.logging.directives.clone()),
    );

    let provider = Arc::new(AssemblyAiProvider::new(
        &settings.provider.api_key,
        settings.provider.base_url.as_deref(),
    ));
    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.base_url.clone(),
    ));
    let upload_staging: Arc<dyn UploadStaging> = Arc::new(
        LocalUploadStaging::new(PathBuf::from(&settings.uploads.dir))
            .context("Failed to prepare upload directory")?,
    );
    let interaction_repository: Arc<dyn InteractionRepository> =
        Arc::new(InMemoryInteractionRepository::new(settings.interactions.capacity));

    let transcription_service = Arc::new(TranscriptionService::new(
        provider,
        Arc::clone(&upload_staging),
        settings.provider.polling_policy(),
    ));
    let query_service = Arc::new(QueryService::new(llm_client, interaction_repository));

    let shutdown = CancellationToken::new();
    let state = AppState {
        transcription_service,
        query_service,
        upload_staging,
        shutdown: shutdown.clone(),
        body_limit_bytes: settings.server.body_limit_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = %environment,
        poll_interval_ms = settings.provider.poll_interval_ms,
        max_wait_secs = settings.provider.max_wait_secs,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, cancelling in-flight transcriptions");
    shutdown.cancel();
}
