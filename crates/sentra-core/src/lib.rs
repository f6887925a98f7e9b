//! Sentra Core: shared data model and unified error type
//!
//! Record types for both analysis pipelines plus the error categories
//! every other crate converts into at its boundary.

pub mod data_model;
pub mod error;

pub use data_model::{
    ContentScan, DocumentAnalysis, ExtractedData, ScanKind, ScanRequest, ScanResult, Verdict,
};
pub use error::SentraError;

/// Version of the Sentra engine
pub const SENTRA_VERSION: &str = "1.0.0";
