//! Prometheus counters for the scan and analysis endpoints.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Registry plus the counters the handlers bump.
pub struct ApiMetrics {
    pub registry: Registry,
    pub scans_total: IntCounter,
    pub unsafe_scans_total: IntCounter,
    pub analyses_total: IntCounter,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scans_total = IntCounter::new("sentra_scans_total", "Content scans served")?;
        let unsafe_scans_total =
            IntCounter::new("sentra_unsafe_scans_total", "Scans with an Unsafe verdict")?;
        let analyses_total =
            IntCounter::new("sentra_document_analyses_total", "Documents analyzed")?;

        registry.register(Box::new(scans_total.clone()))?;
        registry.register(Box::new(unsafe_scans_total.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;

        Ok(Self {
            registry,
            scans_total,
            unsafe_scans_total,
            analyses_total,
        })
    }
}

pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
