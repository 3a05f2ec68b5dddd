//! Bookscribe server binary.
//!
//! Loads configuration, wires the adapters into the summary pipeline and
//! serves the HTTP API.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bookscribe::adapters::access::{OpenAccessChecker, PassphraseAccessChecker};
use bookscribe::adapters::ai::{OpenAIConfig, OpenAIProvider};
use bookscribe::adapters::document::DocxSerializer;
use bookscribe::adapters::drive::{
    GoogleDriveConfig, GoogleDriveUploader, ServiceAccountKey, GOOGLE_DOC_CONTENT_TYPE,
};
use bookscribe::adapters::http::summary::{summary_routes, SummaryAppState};
use bookscribe::application::handlers::summary::{DeliveryOptions, GenerateSummaryHandler};
use bookscribe::config::AppConfig;
use bookscribe::ports::AccessChecker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let handler = build_handler(&config)?;
    let app = build_router(&config, handler);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "Bookscribe listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wires adapters into the summary pipeline handler.
fn build_handler(config: &AppConfig) -> Result<Arc<GenerateSummaryHandler>, Box<dyn std::error::Error>> {
    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or("OPENAI_API_KEY not configured")?;
    let provider = Arc::new(OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    ));

    let key = ServiceAccountKey::from_file(Path::new(&config.drive.service_account_key_file))?;
    let uploader = Arc::new(GoogleDriveUploader::new(GoogleDriveConfig::new(key)));

    let access_checker: Arc<dyn AccessChecker> = match config.access.passphrase.as_deref() {
        Some(passphrase) => Arc::new(PassphraseAccessChecker::new(passphrase)),
        None => Arc::new(OpenAccessChecker::new()),
    };

    let mut options = DeliveryOptions::new(config.drive.folder_id.clone());
    if config.drive.convert_to_google_doc {
        options = options.with_convert_to(GOOGLE_DOC_CONTENT_TYPE);
    }

    Ok(Arc::new(GenerateSummaryHandler::new(
        provider,
        Arc::new(DocxSerializer::new()),
        uploader,
        access_checker,
        options,
    )))
}

/// Assembles the router with the tower-http middleware stack.
fn build_router(config: &AppConfig, handler: Arc<GenerateSummaryHandler>) -> Router {
    Router::new()
        .merge(summary_routes(SummaryAppState::new(handler)))
        .route("/health", get(|| async { "ok" }))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(config)),
        )
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
