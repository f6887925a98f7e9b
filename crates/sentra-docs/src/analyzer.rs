//! Document analyzer: the full pipeline from upload to analysis record.
//!
//! validate type → extract text → legal gate → facts + risky phrases →
//! summary. A gate rejection is a normal business outcome, surfaced as
//! [`DocsError::NotLegalDocument`] rather than a fault.

use crate::extract_text::{DocumentSource, TextExtractor};
use crate::facts::FactExtractor;
use crate::gate::LegalDocumentGate;
use crate::profile::AnalyzerProfile;
use crate::risk::RiskPhraseDetector;
use crate::summary::summarize;
use chrono::Utc;
use sentra_core::{DocumentAnalysis, SentraError};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the document pipeline. Messages are stable and
/// caller-facing; no internal detail leaks through them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocsError {
    #[error("Please upload a valid legal document (PDF, Word, or Text file).")]
    UnsupportedType,

    #[error("Unable to read text from document. Please ensure the file is not encrypted or image-based.")]
    UnreadableDocument,

    #[error("Please upload a valid legal document (not enough legal terminology detected).")]
    NotLegalDocument,
}

impl From<DocsError> for SentraError {
    fn from(err: DocsError) -> Self {
        match err {
            DocsError::UnsupportedType | DocsError::UnreadableDocument => {
                SentraError::ExtractError(err.to_string())
            }
            DocsError::NotLegalDocument => SentraError::GateError(err.to_string()),
        }
    }
}

/// Profile-configured document analyzer.
pub struct DocumentAnalyzer {
    profile: AnalyzerProfile,
    extractor: TextExtractor,
    gate: LegalDocumentGate,
    facts: FactExtractor,
    risk: RiskPhraseDetector,
}

impl DocumentAnalyzer {
    pub fn new(profile: AnalyzerProfile) -> Self {
        Self {
            extractor: TextExtractor::new(profile.min_text_chars),
            gate: LegalDocumentGate::new(profile.clone()),
            facts: FactExtractor::new(profile.clone()),
            risk: RiskPhraseDetector::default(),
            profile,
        }
    }

    pub fn for_mode(mode: &str) -> Self {
        Self::new(AnalyzerProfile::for_mode(mode))
    }

    pub fn profile(&self) -> &AnalyzerProfile {
        &self.profile
    }

    /// Analyze an uploaded document end to end.
    pub fn analyze(&self, source: &DocumentSource) -> Result<DocumentAnalysis, DocsError> {
        let text = self.extractor.extract(source)?;

        if !self.gate.is_legal_document(&text) {
            tracing::info!(document = %source.file_name, "gate rejected document");
            return Err(DocsError::NotLegalDocument);
        }

        let extracted_data = self.facts.extract(&text);
        let risky_phrases = self.risk.find(&text);
        let summary = summarize(&text, &extracted_data);

        tracing::info!(
            document = %source.file_name,
            names = extracted_data.names.len(),
            dates = extracted_data.dates.len(),
            terms = extracted_data.terms.len(),
            risky = risky_phrases.len(),
            "document analyzed"
        );

        Ok(DocumentAnalysis {
            id: Uuid::new_v4(),
            document_name: source.file_name.clone(),
            document_type: source
                .mime_type
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            is_legal_document: true,
            extracted_data,
            risky_phrases,
            summary,
            created_at: Utc::now(),
        })
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerProfile::default())
    }
}
