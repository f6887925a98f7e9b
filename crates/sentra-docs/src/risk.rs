//! Risky-phrase detection.
//!
//! Scans the fixed phrase table against the lower-cased text and reports
//! every phrase present, in table order. The table has no duplicates, so
//! the output needs no dedup.

use crate::keywords::RISKY_PHRASES;

/// Detector with an injectable phrase table.
#[derive(Debug, Clone)]
pub struct RiskPhraseDetector {
    phrases: Vec<String>,
}

impl RiskPhraseDetector {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Every configured phrase that appears at least once.
    pub fn find(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .filter(|phrase| lowered.contains(phrase.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for RiskPhraseDetector {
    fn default() -> Self {
        Self::new(RISKY_PHRASES.iter().map(|p| p.to_string()).collect())
    }
}

/// Scan with the standard phrase table.
pub fn find_risky_phrases(text: &str) -> Vec<String> {
    RiskPhraseDetector::default().find(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_phrase() {
        let found = find_risky_phrases("Disputes go to binding arbitration in Delaware.");
        assert_eq!(found, vec!["binding arbitration"]);
    }

    #[test]
    fn test_case_insensitive_and_table_order() {
        let found = find_risky_phrases(
            "Provider may act at its SOLE DISCRETION, WITHOUT LIMITATION.",
        );
        // Table order, not text order
        assert_eq!(found, vec!["without limitation", "sole discretion"]);
    }

    #[test]
    fn test_clean_text_finds_nothing() {
        assert!(find_risky_phrases("Both sides agreed on fair terms.").is_empty());
    }

    #[test]
    fn test_custom_table() {
        let detector = RiskPhraseDetector::new(vec!["red flag".to_string()]);
        assert_eq!(
            detector.find("This contains a RED FLAG somewhere."),
            vec!["red flag"]
        );
    }
}
