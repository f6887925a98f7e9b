//! CORS layer for the API. Request logging is handled by the router's
//! `TraceLayer`.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
