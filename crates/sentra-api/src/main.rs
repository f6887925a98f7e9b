//! Binary entrypoint for the Sentra API server.
use sentra_api::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Default listen address can be overridden with SENTRA_ADDR
    let addr = std::env::var("SENTRA_ADDR").unwrap_or_else(|_| "0.0.0.0:8790".to_string());
    run(&addr).await;
}
