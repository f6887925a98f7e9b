//! Fact extraction for legal documents.
//!
//! Three independent sub-extractions over the same text, all
//! deduplicating, order-preserving, and capped:
//! - Names: "Firstname Lastname" capitalization shape
//! - Dates: numeric and spelled-month shapes
//! - Terms: the subset of the legal vocabulary actually present

use crate::keywords::LEGAL_KEYWORDS;
use crate::profile::AnalyzerProfile;
use lazy_static::lazy_static;
use regex::Regex;
use sentra_core::ExtractedData;

lazy_static! {
    /// Two consecutive capitalized words
    static ref NAME_PATTERN: Regex = Regex::new(r"\b([A-Z][a-z]+ [A-Z][a-z]+)\b").unwrap();

    /// Numeric D/M/Y with / or - separators
    static ref NUMERIC_DATE: Regex = Regex::new(r"\b\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}\b").unwrap();

    /// "Month D, Y" with the month spelled out
    static ref MONTH_FIRST_DATE: Regex = Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b"
    ).unwrap();

    /// "D Month Y" with the month spelled out
    static ref DAY_FIRST_DATE: Regex = Regex::new(
        r"(?i)\b\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b"
    ).unwrap();
}

/// Generic contract-role words that produce false-positive "names"
/// ("Service Provider", "Client Agreement", ...).
const ROLE_WORDS: &[&str] = &["service", "agreement", "provider", "client"];

/// Profile-driven extractor producing [`ExtractedData`].
#[derive(Debug, Clone)]
pub struct FactExtractor {
    profile: AnalyzerProfile,
}

impl FactExtractor {
    pub fn new(profile: AnalyzerProfile) -> Self {
        Self { profile }
    }

    /// Run all three sub-extractions.
    pub fn extract(&self, text: &str) -> ExtractedData {
        ExtractedData {
            names: extract_names(text, self.profile.filter_role_names, self.profile.max_names),
            dates: extract_dates(text, self.profile.max_dates),
            terms: extract_legal_terms(text, self.profile.max_terms),
        }
    }
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new(AnalyzerProfile::default())
    }
}

/// Extract candidate person names.
pub fn extract_names(text: &str, filter_role_words: bool, cap: usize) -> Vec<String> {
    let candidates = NAME_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| {
            if !filter_role_words {
                return true;
            }
            let lowered = candidate.to_lowercase();
            !ROLE_WORDS.iter().any(|word| lowered.contains(word))
        });

    dedup_capped(candidates, cap)
}

/// Extract dates in all three supported shapes, merged in pattern order.
pub fn extract_dates(text: &str, cap: usize) -> Vec<String> {
    let patterns: [&Regex; 3] = [&*NUMERIC_DATE, &*MONTH_FIRST_DATE, &*DAY_FIRST_DATE];
    let matches = patterns
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| m.as_str().to_string());

    dedup_capped(matches, cap)
}

/// Legal keywords actually present in the text, in keyword-list order.
pub fn extract_legal_terms(text: &str, cap: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    LEGAL_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .take(cap)
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Deduplicate preserving first-occurrence order, stopping at `cap`.
fn dedup_capped<I>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if out.len() == cap {
            break;
        }
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_shape() {
        let names = extract_names("Signed by John Smith and Mary Jones.", false, 10);
        assert_eq!(names, vec!["John Smith", "Mary Jones"]);
    }

    #[test]
    fn test_role_words_filtered() {
        let text = "The Service Provider and John Smith enter this deal.";
        let filtered = extract_names(text, true, 10);
        assert_eq!(filtered, vec!["John Smith"]);

        let unfiltered = extract_names(text, false, 10);
        assert!(unfiltered.contains(&"Service Provider".to_string()));
    }

    #[test]
    fn test_names_dedup_and_cap() {
        let text = "John Smith met John Smith. Also Alice Brown, Bob Green, Carol Hill.";
        let names = extract_names(text, false, 3);
        assert_eq!(names, vec!["John Smith", "Alice Brown", "Bob Green"]);
    }

    #[test]
    fn test_numeric_dates() {
        let dates = extract_dates("Due 12/31/2024 or 1-2-25 at the latest.", 10);
        assert_eq!(dates, vec!["12/31/2024", "1-2-25"]);
    }

    #[test]
    fn test_spelled_month_dates() {
        let dates = extract_dates(
            "Effective January 5, 2024 and ending 3 March 2025.",
            10,
        );
        assert!(dates.contains(&"January 5, 2024".to_string()));
        assert!(dates.contains(&"3 March 2025".to_string()));
    }

    #[test]
    fn test_dates_merge_pattern_families_in_order() {
        let dates = extract_dates("Signed January 5, 2024, countersigned 6/1/2024.", 10);
        // Numeric family is scanned first regardless of text position
        assert_eq!(dates, vec!["6/1/2024", "January 5, 2024"]);
    }

    #[test]
    fn test_terms_in_keyword_list_order() {
        let terms = extract_legal_terms(
            "Breach leads to termination of this agreement.",
            15,
        );
        assert_eq!(terms, vec!["agreement", "breach", "termination"]);
    }

    #[test]
    fn test_term_cap() {
        let everything = LEGAL_KEYWORDS.join(" ");
        let terms = extract_legal_terms(&everything, 15);
        assert_eq!(terms.len(), 15);
    }

    #[test]
    fn test_extractor_respects_profile() {
        let mut profile = AnalyzerProfile::lenient();
        profile.max_names = 1;
        let extractor = FactExtractor::new(profile);

        let data = extractor.extract("Alice Brown and Bob Green, 1/1/2024, agreement.");
        assert_eq!(data.names, vec!["Alice Brown"]);
        assert_eq!(data.dates, vec!["1/1/2024"]);
        assert_eq!(data.terms, vec!["agreement"]);
    }
}
