//! Type-specific checks for URL-shaped and email content.
//!
//! These run in addition to the universal pattern families, and only for
//! the kinds they apply to. Each check contributes at most one distinct
//! reason by construction.

use crate::rules::{
    RuleSet, REASON_INVALID_EMAIL, REASON_NON_SECURE_URL, REASON_SUSPICIOUS_EMAIL_DOMAIN,
    REASON_SUSPICIOUS_URL,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Minimal local@domain.tld shape; intentionally loose
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

const SECURE_SCHEME: &str = "https://";
const SCHEME_SEPARATOR: &str = "://";

/// Reasons raised by URL-shaped content (also applied to QR payloads).
pub fn url_reasons(content: &str, rules: &RuleSet) -> Vec<&'static str> {
    let mut reasons = Vec::new();

    for pattern in &rules.malicious_url {
        if pattern.is_match(content) {
            reasons.push(REASON_SUSPICIOUS_URL);
        }
    }

    if content.contains(SCHEME_SEPARATOR) && !content.starts_with(SECURE_SCHEME) {
        reasons.push(REASON_NON_SECURE_URL);
    }

    reasons
}

/// Reasons raised by email-address content.
pub fn email_reasons(content: &str, rules: &RuleSet) -> Vec<&'static str> {
    let mut reasons = Vec::new();

    if !EMAIL_SHAPE.is_match(content) {
        reasons.push(REASON_INVALID_EMAIL);
    }

    let lowered = content.to_lowercase();
    for domain in &rules.suspicious_email_domains {
        if lowered.contains(domain.as_str()) {
            reasons.push(REASON_SUSPICIOUS_EMAIL_DOMAIN);
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_and_executable_both_flag() {
        let rules = RuleSet::standard();
        let reasons = url_reasons("http://192.168.1.5/install.exe", &rules);
        assert!(reasons.contains(&REASON_SUSPICIOUS_URL));
        assert!(reasons.contains(&REASON_NON_SECURE_URL));
    }

    #[test]
    fn test_https_is_not_flagged_as_insecure() {
        let rules = RuleSet::standard();
        let reasons = url_reasons("https://example.com", &rules);
        assert!(!reasons.contains(&REASON_NON_SECURE_URL));
    }

    #[test]
    fn test_schemeless_string_skips_scheme_check() {
        let rules = RuleSet::standard();
        let reasons = url_reasons("example.com/page", &rules);
        assert!(!reasons.contains(&REASON_NON_SECURE_URL));
    }

    #[test]
    fn test_valid_email_passes_shape() {
        let rules = RuleSet::standard();
        assert!(email_reasons("alice@example.com", &rules).is_empty());
    }

    #[test]
    fn test_invalid_email_shape() {
        let rules = RuleSet::standard();
        let reasons = email_reasons("not-an-email", &rules);
        assert_eq!(reasons, vec![REASON_INVALID_EMAIL]);
    }

    #[test]
    fn test_disposable_domain_flagged() {
        let rules = RuleSet::standard();
        let reasons = email_reasons("user@tempmail.org", &rules);
        assert!(reasons.contains(&REASON_SUSPICIOUS_EMAIL_DOMAIN));
        // Shape is still valid, so only the domain reason fires
        assert_eq!(reasons.len(), 1);
    }
}
