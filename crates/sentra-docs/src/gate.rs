//! Legal-document gate
//!
//! Decides from keyword density whether extracted text is treated as a
//! legal document at all. One-shot decision: a rejected text cannot be
//! reclassified without new input.

use crate::keywords::LEGAL_KEYWORDS;
use crate::profile::AnalyzerProfile;

/// Count how many distinct legal keywords appear in the text.
///
/// Substring matching over the lower-cased text; each keyword counts at
/// most once no matter how often it repeats. Monotonic in keyword
/// coverage.
pub fn keyword_matches(text: &str) -> usize {
    let lowered = text.to_lowercase();
    LEGAL_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// Threshold gate over [`keyword_matches`].
pub struct LegalDocumentGate {
    profile: AnalyzerProfile,
}

impl LegalDocumentGate {
    pub fn new(profile: AnalyzerProfile) -> Self {
        Self { profile }
    }

    pub fn for_mode(mode: &str) -> Self {
        Self::new(AnalyzerProfile::for_mode(mode))
    }

    /// True iff the distinct-keyword count meets the profile threshold.
    pub fn is_legal_document(&self, text: &str) -> bool {
        keyword_matches(text) >= self.profile.legal_keyword_threshold
    }
}

impl Default for LegalDocumentGate {
    fn default() -> Self {
        Self::new(AnalyzerProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keyword_counts_once() {
        let text = "agreement agreement agreement AGREEMENT";
        assert_eq!(keyword_matches(text), 1);
    }

    #[test]
    fn test_case_insensitive_counting() {
        let text = "This AGREEMENT binds each Party to Arbitration.";
        // agreement, party (also a substring of no other entry), parties?
        // "parties" is absent; arbitration present.
        assert_eq!(keyword_matches(text), 3);
    }

    #[test]
    fn test_lenient_gate_accepts_three_keywords() {
        let gate = LegalDocumentGate::default();
        let text = "This agreement creates liability for breach of its terms.";
        assert!(gate.is_legal_document(text));
    }

    #[test]
    fn test_strict_gate_needs_five() {
        let gate = LegalDocumentGate::for_mode("strict");
        let three = "This agreement creates liability for breach of its terms.";
        assert!(!gate.is_legal_document(three));

        let five = "This agreement creates liability for breach, subject to \
                    arbitration in the agreed jurisdiction.";
        assert!(gate.is_legal_document(five));
    }

    #[test]
    fn test_monotonic_in_keyword_coverage() {
        let base = "This contract includes a covenant and a dispute clause.";
        let extended = format!("{} Termination requires an amendment.", base);
        assert!(keyword_matches(&extended) >= keyword_matches(base));
    }

    #[test]
    fn test_plain_prose_rejected() {
        let gate = LegalDocumentGate::default();
        assert!(!gate.is_legal_document("We went hiking and the weather was lovely."));
    }
}
