//! Bounded in-memory history store.
//!
//! Keeps the newest records first and trims the oldest past a fixed
//! retention window (100 scans, 50 analyses).

use crate::{HistoryStats, HistoryStore, StoreError};
use sentra_core::{ContentScan, DocumentAnalysis, Verdict};
use std::collections::VecDeque;
use std::sync::Mutex;

const MAX_SCANS: usize = 100;
const MAX_ANALYSES: usize = 50;

/// Mutex-guarded deques; safe to share behind an `Arc`.
pub struct MemoryStore {
    scans: Mutex<VecDeque<ContentScan>>,
    analyses: Mutex<VecDeque<DocumentAnalysis>>,
    max_scans: usize,
    max_analyses: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_limits(MAX_SCANS, MAX_ANALYSES)
    }

    pub fn with_limits(max_scans: usize, max_analyses: usize) -> Self {
        Self {
            scans: Mutex::new(VecDeque::new()),
            analyses: Mutex::new(VecDeque::new()),
            max_scans,
            max_analyses,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryStore {
    fn record_scan(&self, scan: ContentScan) -> Result<(), StoreError> {
        let mut scans = self
            .scans
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        scans.push_front(scan);
        scans.truncate(self.max_scans);
        Ok(())
    }

    fn record_analysis(&self, analysis: DocumentAnalysis) -> Result<(), StoreError> {
        let mut analyses = self
            .analyses
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        analyses.push_front(analysis);
        analyses.truncate(self.max_analyses);
        Ok(())
    }

    fn recent_scans(&self) -> Result<Vec<ContentScan>, StoreError> {
        let scans = self
            .scans
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(scans.iter().cloned().collect())
    }

    fn recent_analyses(&self) -> Result<Vec<DocumentAnalysis>, StoreError> {
        let analyses = self
            .analyses
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(analyses.iter().cloned().collect())
    }

    fn stats(&self) -> Result<HistoryStats, StoreError> {
        let scans = self
            .scans
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let analyses = self
            .analyses
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(HistoryStats {
            total_scans: scans.len(),
            unsafe_scans: scans.iter().filter(|s| s.result == Verdict::Unsafe).count(),
            total_analyses: analyses.len(),
        })
    }
}
