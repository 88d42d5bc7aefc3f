use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use policybrief::application::services::SummaryPipeline;
use policybrief::infrastructure::auth::SignedTokenVerifier;
use policybrief::infrastructure::llm::GeminiClient;
use policybrief::infrastructure::observability::{init_tracing, TracingConfig};
use policybrief::infrastructure::persistence::{create_pool, PgSummaryRepository};
use policybrief::infrastructure::storage::LocalBlobStore;
use policybrief::infrastructure::text_processing::PdfAdapter;
use policybrief::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig {
            json_format: settings.logging.enable_json,
            environment: settings.environment.to_string(),
        },
        settings.server.port,
    );

    let pool = create_pool(
        &settings.database.url,
        settings.database.max_connections,
    )
    .await?;

    let extractor = Arc::new(PdfAdapter::new());
    let provider = Arc::new(GeminiClient::new(
        settings.provider.api_key.clone(),
        settings.provider.model.clone(),
    ));
    let repository = Arc::new(PgSummaryRepository::new(pool));
    let blob_store = Arc::new(LocalBlobStore::new(settings.upload.storage_dir.clone())?);
    let credential_verifier = Arc::new(SignedTokenVerifier::new(
        settings.auth.token_secret.clone(),
    ));

    let pipeline = Arc::new(SummaryPipeline::new(
        extractor,
        provider,
        repository,
        blob_store,
        settings.upload.max_file_size_bytes(),
    ));

    let state = AppState {
        pipeline,
        credential_verifier,
        upload_limit_bytes: settings.upload.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
