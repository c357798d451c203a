use crate::components::{ChatCompletionClient, SefariaClient};
use crate::config::Config;
use crate::digest::DigestService;
use crate::error::{DigestResult, Error};
use crate::handlers::{ping_handler, summarize_handler};
use crate::shutdown;
use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub digest: Arc<DigestService>,
}

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => {
            if config.deepseek_api_key.is_none() {
                tracing::warn!("DEEPSEEK_API_KEY is not set, summaries will fail");
            }
            Ok(Arc::new(config))
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// HTTP client shared by the upstream clients, with the per-call timeout applied
pub fn http_client(config: &Config) -> DigestResult<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| Error::Other(format!("Failed to build HTTP client: {}", e)))
}

/// Wire the Sefaria and chat-completion clients into the digest
pub fn build_state(config: Arc<Config>) -> DigestResult<AppState> {
    let client = http_client(&config)?;
    let source = SefariaClient::new(Arc::clone(&config), client.clone());
    let summarizer = ChatCompletionClient::new(Arc::clone(&config), client);

    Ok(AppState {
        digest: Arc::new(DigestService::new(Arc::new(source), Arc::new(summarizer))),
    })
}

/// Build the router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize_handler))
        .route("/ping", get(ping_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives
pub async fn start_server(config: Arc<Config>) -> miette::Result<()> {
    let state = build_state(Arc::clone(&config))?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await.map_err(Error::from)?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("Server shut down");
    Ok(())
}
