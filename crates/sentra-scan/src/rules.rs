//! Static rule tables for content classification.
//!
//! Patterns are compiled once and shared; [`RuleSet`] carries them as
//! injectable configuration so tests can swap tables without touching
//! global state.

use lazy_static::lazy_static;
use regex::Regex;

/// Category-level reason reported when any phishing pattern matches.
pub const REASON_PHISHING: &str = "Potential phishing content detected";
/// Category-level reason for promotional/spam patterns.
pub const REASON_SPAM: &str = "Spam or promotional content detected";
/// Category-level reason for threat/violence/hate patterns.
pub const REASON_ABUSIVE: &str = "Abusive or harmful language detected";
/// Reason for URL-shaped red flags (IP-literal host, odd suffix, executable).
pub const REASON_SUSPICIOUS_URL: &str = "Suspicious URL pattern detected";
/// Reason for a scheme-bearing URL that is not https.
pub const REASON_NON_SECURE_URL: &str = "Non-secure URL detected";
/// Reason for content that fails the minimal email shape.
pub const REASON_INVALID_EMAIL: &str = "Invalid email format";
/// Reason for a disposable-email-domain hit.
pub const REASON_SUSPICIOUS_EMAIL_DOMAIN: &str = "Suspicious email domain detected";

lazy_static! {
    /// Shortened-URL domains and classic lure wording
    static ref PHISHING_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)bit\.ly",
        r"(?i)tinyurl",
        r"(?i)verify.*account",
        r"(?i)confirm.*identity",
        r"(?i)urgent.*action",
        r"(?i)suspended.*account",
        r"(?i)click.*here.*immediately",
        r"(?i)won.*prize",
        r"(?i)claim.*reward",
    ]);

    /// Promotional pressure wording and named drug-spam terms
    static ref SPAM_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)buy.*now",
        r"(?i)limited.*time.*offer",
        r"(?i)act.*now",
        r"(?i)free.*money",
        r"(?i)make.*\$.*fast",
        r"(?i)work.*from.*home",
        r"(?i)lose.*weight.*fast",
        r"(?i)viagra",
        r"(?i)cialis",
    ]);

    /// Threat/violence word-pair proximity matches
    static ref ABUSIVE_PATTERNS: Vec<Regex> = compile(&[
        r"(?i)\b(kill|murder|harm|attack)\b.*\b(you|yourself|someone)\b",
        r"(?i)\b(hate|despise)\b.*\b(you|people|group)\b",
        r"(?i)\b(threat|threaten|threatening)\b",
        r"(?i)\b(violence|violent)\b",
    ]);

    /// IP-literal hosts, suspicious suffix shapes, executable endings
    static ref MALICIOUS_URL_PATTERNS: Vec<Regex> = compile(&[
        r"\b(\d{1,3}\.){3}\d{1,3}\b",
        r"(?i)[^a-z0-9-.]\.[a-z]{2,}",
        r"(?i)\.(exe|bat|cmd|scr|vbs|js|jar)$",
    ]);
}

/// Disposable-email-domain substrings, checked against lower-cased content.
const SUSPICIOUS_EMAIL_DOMAINS: &[&str] =
    &["@tempmail", "@disposable", "@throwaway", "@guerrillamail"];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
}

/// The full pattern configuration for one classifier instance.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub phishing: Vec<Regex>,
    pub spam: Vec<Regex>,
    pub abusive: Vec<Regex>,
    pub malicious_url: Vec<Regex>,
    pub suspicious_email_domains: Vec<String>,
}

impl RuleSet {
    /// The standard production tables.
    pub fn standard() -> Self {
        RuleSet {
            phishing: PHISHING_PATTERNS.clone(),
            spam: SPAM_PATTERNS.clone(),
            abusive: ABUSIVE_PATTERNS.clone(),
            malicious_url: MALICIOUS_URL_PATTERNS.clone(),
            suspicious_email_domains: SUSPICIOUS_EMAIL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
