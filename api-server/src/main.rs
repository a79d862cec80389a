//! Vantage Backend Server
//!
//! HTTP surface for the Vantage URL scanner.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      VANTAGE BACKEND                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────────┐  ┌───────────────────┐  │
//! │  │  API      │  │  Scan Engine   │  │  Assistant        │  │
//! │  │  Gateway  │  │  (vantage-core │  │  (Gemini REST)    │  │
//! │  │  (Axum)   │  │   + ONNX)      │  │                   │  │
//! │  └─────┬─────┘  └───────┬────────┘  └─────────┬─────────┘  │
//! │        └────────────────┼─────────────────────┘            │
//! │                         ▼                                  │
//! │                 ┌───────────────┐                          │
//! │                 │ history.json  │                          │
//! │                 └───────────────┘                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Model artifacts load once at startup; a load failure is fatal and the
//! server never starts listening.

mod assistant;
mod config;
mod error;
mod handlers;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vantage_core::{HistoryStore, OnnxClassifier, ScanEngine, TfidfVectorizer, TrustList};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vantage_server=debug,vantage_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Vantage backend starting...");

    // Load model artifacts. A missing or corrupt artifact means the scoring
    // entrypoint never becomes ready; there is no fallback classifier.
    let history = Arc::new(HistoryStore::new(&config.history_path));
    let engine = match build_engine(&config, history.clone()) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            tracing::error!("Failed to load model artifacts: {}", e);
            std::process::exit(1);
        }
    };

    let assistant = Arc::new(assistant::GeminiClient::new(assistant::GeminiConfig {
        api_key: config.gemini_api_key.clone(),
        model: config.gemini_model.clone(),
        timeout_seconds: config.gemini_timeout_seconds,
    }));

    let state = AppState {
        engine,
        history,
        assistant,
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

fn build_engine(
    config: &config::Config,
    history: Arc<HistoryStore>,
) -> Result<ScanEngine, vantage_core::ArtifactError> {
    let vectorizer = TfidfVectorizer::load(Path::new(&config.vectorizer_path))?;
    let classifier = OnnxClassifier::load(
        Path::new(&config.model_path),
        Path::new(&config.model_meta_path),
    )?;

    ScanEngine::new(vectorizer, Box::new(classifier), TrustList::default(), history)
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScanEngine>,
    pub history: Arc<HistoryStore>,
    pub assistant: Arc<assistant::GeminiClient>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::scan::predict))
        .route("/chat", post(handlers::chat::chat))
        .route("/history", get(handlers::history::history))
        .route("/stats", get(handlers::history::stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
