//! Analyzer profiles
//!
//! The two historical call paths of this pipeline disagreed on the gate
//! threshold (3 vs 5) and on whether name extraction filters contract-role
//! words. Both behaviors live here as named profiles; `lenient` is the
//! canonical default.

use serde::{Deserialize, Serialize};

/// Tunable thresholds and caps for one analyzer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerProfile {
    /// Profile name (e.g., "lenient@1.0", "strict@1.0")
    pub name: String,

    // === Gate ===
    /// Distinct legal keywords required before text counts as legal
    pub legal_keyword_threshold: usize,

    // === Extraction ===
    /// Drop name candidates containing contract-role words
    pub filter_role_names: bool,

    /// Maximum extracted names
    pub max_names: usize,

    /// Maximum extracted dates
    pub max_dates: usize,

    /// Maximum extracted terms
    pub max_terms: usize,

    // === Input floor ===
    /// Minimum trimmed text length before extraction is considered readable
    pub min_text_chars: usize,
}

impl AnalyzerProfile {
    /// Canonical profile: low gate threshold, role-name filtering on.
    pub fn lenient() -> Self {
        Self {
            name: "lenient@1.0".to_string(),
            legal_keyword_threshold: 3,
            filter_role_names: true,
            max_names: 10,
            max_dates: 10,
            max_terms: 15,
            min_text_chars: 50,
        }
    }

    /// Stricter gate, unfiltered names.
    pub fn strict() -> Self {
        Self {
            name: "strict@1.0".to_string(),
            legal_keyword_threshold: 5,
            filter_role_names: false,
            max_names: 10,
            max_dates: 10,
            max_terms: 15,
            min_text_chars: 50,
        }
    }

    /// Load profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Get profile by mode name
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "strict" => Self::strict(),
            _ => Self::lenient(),
        }
    }
}

impl Default for AnalyzerProfile {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_defaults() {
        let profile = AnalyzerProfile::lenient();
        assert_eq!(profile.legal_keyword_threshold, 3);
        assert!(profile.filter_role_names);
        assert_eq!(profile.max_terms, 15);
    }

    #[test]
    fn test_strict_threshold() {
        let profile = AnalyzerProfile::strict();
        assert_eq!(profile.legal_keyword_threshold, 5);
        assert!(!profile.filter_role_names);
    }

    #[test]
    fn test_from_yaml() {
        let profile = AnalyzerProfile::from_yaml(
            r#"
name: "custom@1.0"
legal_keyword_threshold: 4
filter_role_names: true
max_names: 5
max_dates: 5
max_terms: 8
min_text_chars: 20
"#,
        )
        .unwrap();

        assert_eq!(profile.name, "custom@1.0");
        assert_eq!(profile.legal_keyword_threshold, 4);
        assert_eq!(profile.max_names, 5);
    }

    #[test]
    fn test_for_mode_falls_back_to_lenient() {
        assert_eq!(AnalyzerProfile::for_mode("strict").name, "strict@1.0");
        assert_eq!(AnalyzerProfile::for_mode("anything").name, "lenient@1.0");
    }
}
