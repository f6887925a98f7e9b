//! Content classifier: rule evaluation and verdict derivation.
//!
//! Total over its input: any `(kind, content)` pair, including the empty
//! string, produces a result. Category patterns collapse into one reason
//! per category; deduplication preserves first-seen order.

use crate::heuristics;
use crate::rules::{RuleSet, REASON_ABUSIVE, REASON_PHISHING, REASON_SPAM};
use sentra_core::{ScanKind, ScanResult};

/// Rule-driven Safe/Unsafe classifier.
///
/// Holds its tables as injected configuration; construct with
/// [`RuleSet::standard`] (the default) or a custom set in tests.
#[derive(Debug, Clone, Default)]
pub struct ContentClassifier {
    rules: RuleSet,
}

impl ContentClassifier {
    pub fn new(rules: RuleSet) -> Self {
        ContentClassifier { rules }
    }

    /// Classify a payload. Never fails.
    pub fn classify(&self, kind: ScanKind, content: &str) -> ScanResult {
        let mut reasons: Vec<&'static str> = Vec::new();

        for pattern in &self.rules.phishing {
            if pattern.is_match(content) {
                reasons.push(REASON_PHISHING);
            }
        }

        for pattern in &self.rules.spam {
            if pattern.is_match(content) {
                reasons.push(REASON_SPAM);
            }
        }

        for pattern in &self.rules.abusive {
            if pattern.is_match(content) {
                reasons.push(REASON_ABUSIVE);
            }
        }

        if kind.is_url_like() {
            reasons.extend(heuristics::url_reasons(content, &self.rules));
        }

        if kind == ScanKind::Email {
            reasons.extend(heuristics::email_reasons(content, &self.rules));
        }

        let result = ScanResult::from_reasons(reasons);
        tracing::debug!(
            kind = %kind,
            verdict = %result.verdict,
            reason_count = result.reasons.len(),
            "content classified"
        );
        result
    }
}

/// Classify with the standard rule tables.
pub fn scan(kind: ScanKind, content: &str) -> ScanResult {
    ContentClassifier::default().classify(kind, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_core::Verdict;

    #[test]
    fn test_benign_text_is_safe() {
        let result = scan(ScanKind::Text, "Hello, how are you today?");
        assert_eq!(result.verdict, Verdict::Safe);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_empty_content_is_safe_for_text() {
        let result = scan(ScanKind::Text, "");
        assert!(result.is_safe());
    }

    #[test]
    fn test_category_reasons_collapse() {
        // Hits two phishing patterns and one spam pattern, but each
        // category reports a single reason
        let result = scan(
            ScanKind::Text,
            "Urgent action: verify account and claim free money now",
        );
        assert_eq!(result.verdict, Verdict::Unsafe);
        assert_eq!(
            result.reasons,
            vec![
                "Potential phishing content detected",
                "Spam or promotional content detected",
            ]
        );
    }

    #[test]
    fn test_text_kind_never_gets_type_specific_reasons() {
        // Would trip the IP-literal and scheme checks as a URL
        let result = scan(ScanKind::Text, "http://192.168.1.5/install.exe");
        for reason in &result.reasons {
            assert!(!reason.contains("URL"), "unexpected reason: {}", reason);
            assert!(!reason.contains("email"), "unexpected reason: {}", reason);
        }
    }

    #[test]
    fn test_qr_code_shares_url_checks() {
        let url = scan(ScanKind::Url, "http://192.168.1.5/install.exe");
        let qr = scan(ScanKind::QrCode, "http://192.168.1.5/install.exe");
        assert_eq!(url, qr);
    }

    #[test]
    fn test_deterministic() {
        let a = scan(ScanKind::Email, "user@tempmail.com urgent action");
        let b = scan(ScanKind::Email, "user@tempmail.com urgent action");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_rule_set_injection() {
        let mut rules = RuleSet::standard();
        rules.phishing = vec![regex::Regex::new(r"(?i)magic word").unwrap()];
        let classifier = ContentClassifier::new(rules);

        let hit = classifier.classify(ScanKind::Text, "the Magic Word appears");
        assert_eq!(hit.verdict, Verdict::Unsafe);

        // The standard lures no longer match under the swapped table
        let miss = classifier.classify(ScanKind::Text, "verify your account");
        assert!(miss.is_safe());
    }
}
