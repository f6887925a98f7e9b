//! Sentra-Store: history persistence for scan and analysis records
//!
//! The engine never reads this store; callers persist results after the
//! fact and render them for display. A storage failure must never mask a
//! computed result, so every operation returns a plain [`StoreError`]
//! the caller can log and move past.

pub mod memory;

use sentra_core::{ContentScan, DocumentAnalysis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::MemoryStore;

/// Storage failures. Opaque to the engine; reported alongside (never
/// instead of) the computed result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Aggregate usage counters for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_scans: usize,
    pub unsafe_scans: usize,
    pub total_analyses: usize,
}

/// Persists result records and returns them newest-first for display.
pub trait HistoryStore: Send + Sync {
    /// Record a completed content scan.
    fn record_scan(&self, scan: ContentScan) -> Result<(), StoreError>;

    /// Record a completed document analysis.
    fn record_analysis(&self, analysis: DocumentAnalysis) -> Result<(), StoreError>;

    /// Most recent scans, newest first.
    fn recent_scans(&self) -> Result<Vec<ContentScan>, StoreError>;

    /// Most recent analyses, newest first.
    fn recent_analyses(&self) -> Result<Vec<DocumentAnalysis>, StoreError>;

    /// Aggregate counters over the retained window.
    fn stats(&self) -> Result<HistoryStats, StoreError>;
}
