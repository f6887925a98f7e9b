//! Sentra API /v1: REST endpoints
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use sentra_docs::DocumentAnalyzer;
use sentra_scan::ContentClassifier;
use sentra_store::{HistoryStore, MemoryStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use metrics::ApiMetrics;

/// Shared application state: the two engines, the history store, and the
/// metrics registry.
pub struct AppState {
    pub classifier: ContentClassifier,
    pub analyzer: DocumentAnalyzer,
    pub store: Arc<dyn HistoryStore>,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Standard state: default rule tables, canonical analyzer profile,
    /// bounded in-memory history.
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            classifier: ContentClassifier::default(),
            analyzer: DocumentAnalyzer::default(),
            store: Arc::new(MemoryStore::new()),
            metrics: ApiMetrics::new()?,
        })
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/scan", post(handlers::scan))
        .route("/v1/scan/text", post(handlers::scan_text))
        .route("/v1/scan/link", post(handlers::scan_link))
        .route("/v1/scan/qr", post(handlers::scan_qr))
        .route("/v1/scan/file", post(handlers::scan_file))
        .route("/v1/documents/analyze", post(handlers::analyze_document))
        .route("/v1/history/scans", get(handlers::scan_history))
        .route("/v1/history/documents", get(handlers::document_history))
        .route("/v1/history/stats", get(handlers::history_stats))
        .route("/v1/metrics", get(handlers::metrics_export))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let state = Arc::new(AppState::new().expect("Failed to build metrics registry"));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Sentra API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
