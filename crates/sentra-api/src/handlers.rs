//! API Handlers
//!
//! Thin translation between the wire and the engine: requests are
//! validated before any engine call, results are serialized in the
//! canonical shape, and a failed history write is logged without masking
//! the computed result.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use sentra_core::{ContentScan, ScanKind, ScanRequest, ScanResult, SENTRA_VERSION};
use sentra_docs::DocumentSource;
use sentra_scan::ContentClassifier;

use crate::AppState;

const ERR_MISSING_SCAN_FIELDS: &str = "Missing required fields: type and content";
const ERR_MISSING_FILE: &str = "Missing file or fileName";
const ERR_INVALID_MULTIPART: &str = "Invalid multipart payload";
const ERR_HISTORY_UNAVAILABLE: &str = "History is temporarily unavailable";

/// Extensions rejected outright by the file scanner.
const BLOCKED_FILE_EXTENSIONS: &[&str] = &[".exe", ".bat", ".vbs", ".js", ".sh", ".cmd"];
const REASON_DANGEROUS_EXTENSION: &str = "Dangerous file extension detected";

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": SENTRA_VERSION })),
    )
}

// =============================================================================
// Content scans
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct TextScanRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkScanRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct QrScanRequest {
    pub content: String,
}

/// Generic scan endpoint: `{ "type": ..., "content": ... }`. Unknown
/// `type` values are rejected by deserialization before this runs.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> (StatusCode, Json<Value>) {
    run_scan(&state, request.kind, &request.content)
}

pub async fn scan_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TextScanRequest>,
) -> (StatusCode, Json<Value>) {
    run_scan(&state, ScanKind::Text, &request.text)
}

pub async fn scan_link(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LinkScanRequest>,
) -> (StatusCode, Json<Value>) {
    run_scan(&state, ScanKind::Url, &request.url)
}

pub async fn scan_qr(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QrScanRequest>,
) -> (StatusCode, Json<Value>) {
    run_scan(&state, ScanKind::QrCode, &request.content)
}

fn run_scan(state: &AppState, kind: ScanKind, content: &str) -> (StatusCode, Json<Value>) {
    if content.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": ERR_MISSING_SCAN_FIELDS })),
        );
    }

    let result = state.classifier.classify(kind, content);

    state.metrics.scans_total.inc();
    if !result.is_safe() {
        state.metrics.unsafe_scans_total.inc();
    }

    // The scan result stands even if the history write fails
    let record = ContentScan::new(kind, content, &result);
    if let Err(err) = state.store.record_scan(record) {
        tracing::warn!(error = %err, "failed to persist scan history");
    }

    (StatusCode::OK, Json(json!(result)))
}

/// Scan an uploaded file: blocked extensions are flagged, and plain-text
/// uploads additionally run through the text classifier.
pub async fn scan_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let upload = match read_upload(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": ERR_MISSING_FILE })),
            )
        }
        Err(response) => return response,
    };

    let result = file_scan_result(&state.classifier, &upload.source.file_name, &upload.source.bytes);

    state.metrics.scans_total.inc();
    if !result.is_safe() {
        state.metrics.unsafe_scans_total.inc();
    }

    (StatusCode::OK, Json(json!(result)))
}

fn file_scan_result(classifier: &ContentClassifier, file_name: &str, bytes: &[u8]) -> ScanResult {
    let mut reasons: Vec<String> = Vec::new();
    let lowered = file_name.to_lowercase();

    if BLOCKED_FILE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
    {
        reasons.push(REASON_DANGEROUS_EXTENSION.to_string());
    }

    if lowered.ends_with(".txt") {
        let content = String::from_utf8_lossy(bytes);
        let text_result = classifier.classify(ScanKind::Text, &content);
        reasons.extend(text_result.reasons);
    }

    ScanResult::from_reasons(reasons)
}

// =============================================================================
// Document analysis
// =============================================================================

pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let upload = match read_upload(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": ERR_MISSING_FILE })),
            )
        }
        Err(response) => return response,
    };

    let mut source = upload.source;
    if let Some(name) = upload.name_override {
        source.file_name = name;
    }

    match state.analyzer.analyze(&source) {
        Ok(analysis) => {
            state.metrics.analyses_total.inc();

            if let Err(err) = state.store.record_analysis(analysis.clone()) {
                tracing::warn!(error = %err, "failed to persist analysis history");
            }

            (
                StatusCode::OK,
                Json(json!({ "success": true, "analysis": analysis })),
            )
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": err.to_string() })),
        ),
    }
}

/// A parsed multipart upload: the file plus an optional name override.
struct Upload {
    source: DocumentSource,
    name_override: Option<String>,
}

/// Pull the `file` (and optional `fileName`) fields out of a multipart
/// body. `Ok(None)` means no file field was present.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<Option<Upload>, (StatusCode, Json<Value>)> {
    let mut source: Option<DocumentSource> = None;
    let mut name_override: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(error = %err, "rejected malformed multipart body");
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": ERR_INVALID_MULTIPART })),
                ));
            }
        };

        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("document").to_string();
                let mime_type = field.content_type().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => {
                        source = Some(DocumentSource::new(file_name, mime_type, bytes.to_vec()))
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "failed to read uploaded file");
                        return Err((
                            StatusCode::BAD_REQUEST,
                            Json(json!({ "error": ERR_INVALID_MULTIPART })),
                        ));
                    }
                }
            }
            Some("fileName") => {
                if let Ok(text) = field.text().await {
                    if !text.is_empty() {
                        name_override = Some(text);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(source.map(|source| Upload {
        source,
        name_override,
    }))
}

// =============================================================================
// History
// =============================================================================

pub async fn scan_history(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.store.recent_scans() {
        Ok(scans) => (StatusCode::OK, Json(json!({ "scans": scans }))),
        Err(err) => {
            tracing::error!(error = %err, "failed to read scan history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": ERR_HISTORY_UNAVAILABLE })),
            )
        }
    }
}

pub async fn document_history(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.store.recent_analyses() {
        Ok(analyses) => (StatusCode::OK, Json(json!({ "analyses": analyses }))),
        Err(err) => {
            tracing::error!(error = %err, "failed to read document history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": ERR_HISTORY_UNAVAILABLE })),
            )
        }
    }
}

pub async fn history_stats(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.store.stats() {
        Ok(stats) => (StatusCode::OK, Json(json!(stats))),
        Err(err) => {
            tracing::error!(error = %err, "failed to read history stats");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": ERR_HISTORY_UNAVAILABLE })),
            )
        }
    }
}

// =============================================================================
// Metrics
// =============================================================================

pub async fn metrics_export(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    match crate::metrics::encode(&state.metrics.registry) {
        Ok(body) => (StatusCode::OK, body),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}
