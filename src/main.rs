use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use intake::application::services::SubmissionService;
use intake::infrastructure::llm::create_llm_client;
use intake::infrastructure::observability::{TracingConfig, init_tracing};
use intake::infrastructure::reporting::LopdfRoadmapRenderer;
use intake::infrastructure::storage::CsvSubmissionStore;
use intake::infrastructure::text_processing::CompositeFileLoader;
use intake::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let llm_client = Arc::new(create_llm_client(&settings.llm));
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let store = Arc::new(CsvSubmissionStore::new(&settings.storage.table_file));
    let renderer = Arc::new(LopdfRoadmapRenderer::new());

    let submission_service = Arc::new(SubmissionService::new(
        llm_client,
        file_loader,
        store,
        renderer,
        settings.storage.submissions_dir.clone(),
    ));

    let state = AppState { submission_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
