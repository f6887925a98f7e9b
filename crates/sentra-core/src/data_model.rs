//! Data Model: ScanRequest, ScanResult, ContentScan, DocumentAnalysis
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The kind of content being scanned.
///
/// Closed set: unknown tags fail deserialization at the boundary instead
/// of silently skipping type-specific checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    Text,
    Url,
    Email,
    QrCode,
}

impl ScanKind {
    /// Whether URL-shaped heuristics apply to this kind.
    pub fn is_url_like(&self) -> bool {
        matches!(self, ScanKind::Url | ScanKind::QrCode)
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanKind::Text => write!(f, "text"),
            ScanKind::Url => write!(f, "url"),
            ScanKind::Email => write!(f, "email"),
            ScanKind::QrCode => write!(f, "qr_code"),
        }
    }
}

/// A request to classify a piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Content kind (ex: "text", "url", "email", "qr_code")
    #[serde(rename = "type")]
    pub kind: ScanKind,
    /// Caller-supplied payload, unvalidated until classified
    pub content: String,
}

/// Binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Unsafe,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Safe => write!(f, "Safe"),
            Verdict::Unsafe => write!(f, "Unsafe"),
        }
    }
}

/// Outcome of a content scan.
///
/// Invariant: `verdict == Unsafe` exactly when `reasons` is non-empty.
/// Construct through [`ScanResult::from_reasons`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(rename = "result")]
    pub verdict: Verdict,
    #[serde(
        rename = "detectedReasons",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reasons: Vec<String>,
}

impl ScanResult {
    /// Build a result from accumulated reasons, deduplicating while
    /// preserving first-seen order. Empty reasons mean Safe.
    pub fn from_reasons<I, S>(reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for reason in reasons {
            let reason = reason.into();
            if !unique.contains(&reason) {
                unique.push(reason);
            }
        }

        let verdict = if unique.is_empty() {
            Verdict::Safe
        } else {
            Verdict::Unsafe
        };

        ScanResult {
            verdict,
            reasons: unique,
        }
    }

    /// A safe result with no reasons.
    pub fn safe() -> Self {
        ScanResult {
            verdict: Verdict::Safe,
            reasons: Vec::new(),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.verdict == Verdict::Safe
    }
}

/// A persisted content scan, newest-first in the history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentScan {
    pub id: Uuid,
    pub scan_type: ScanKind,
    pub input_content: String,
    pub result: Verdict,
    /// Reasons joined with "; ", absent for safe scans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_reasons: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentScan {
    /// Create a history record for a completed scan.
    pub fn new(kind: ScanKind, content: impl Into<String>, result: &ScanResult) -> Self {
        let detected_reasons = if result.reasons.is_empty() {
            None
        } else {
            Some(result.reasons.join("; "))
        };

        ContentScan {
            id: Uuid::new_v4(),
            scan_type: kind,
            input_content: content.into(),
            result: result.verdict,
            detected_reasons,
            created_at: Utc::now(),
        }
    }
}

/// Structured facts pulled from a legal document.
///
/// Each list is deduplicated, first-occurrence ordered, and capped by the
/// analyzer profile (10 names, 10 dates, 15 terms by default).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub names: Vec<String>,
    pub dates: Vec<String>,
    pub terms: Vec<String>,
}

/// The full analysis of a document that passed the legal gate.
///
/// Never constructed for rejected documents; a gate rejection surfaces as
/// an error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub id: Uuid,
    pub document_name: String,
    pub document_type: String,
    pub is_legal_document: bool,
    pub extracted_data: ExtractedData,
    /// Rule-table order; the phrase list itself has no duplicates
    pub risky_phrases: Vec<String>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_kind_serde_round_trip() {
        for (kind, tag) in [
            (ScanKind::Text, "\"text\""),
            (ScanKind::Url, "\"url\""),
            (ScanKind::Email, "\"email\""),
            (ScanKind::QrCode, "\"qr_code\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), tag);
            let parsed: ScanKind = serde_json::from_str(tag).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_scan_kind_rejects_unknown() {
        let parsed: Result<ScanKind, _> = serde_json::from_str("\"image\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_from_reasons_dedup_preserves_order() {
        let result = ScanResult::from_reasons(["b", "a", "b", "c", "a"]);
        assert_eq!(result.verdict, Verdict::Unsafe);
        assert_eq!(result.reasons, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_reasons_is_safe() {
        let result = ScanResult::from_reasons(Vec::<String>::new());
        assert_eq!(result.verdict, Verdict::Safe);
        assert!(result.reasons.is_empty());
        assert!(result.is_safe());
    }

    #[test]
    fn test_result_wire_shape() {
        let unsafe_json =
            serde_json::to_value(ScanResult::from_reasons(["Invalid email format"])).unwrap();
        assert_eq!(unsafe_json["result"], "Unsafe");
        assert_eq!(unsafe_json["detectedReasons"][0], "Invalid email format");

        let safe_json = serde_json::to_value(ScanResult::safe()).unwrap();
        assert_eq!(safe_json["result"], "Safe");
        assert!(safe_json.get("detectedReasons").is_none());
    }

    #[test]
    fn test_content_scan_joins_reasons() {
        let result = ScanResult::from_reasons(["one", "two"]);
        let record = ContentScan::new(ScanKind::Text, "payload", &result);
        assert_eq!(record.detected_reasons.as_deref(), Some("one; two"));
        assert_eq!(record.result, Verdict::Unsafe);

        let safe = ContentScan::new(ScanKind::Text, "hello", &ScanResult::safe());
        assert!(safe.detected_reasons.is_none());
    }
}
