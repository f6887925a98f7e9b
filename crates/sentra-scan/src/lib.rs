//! Sentra-Scan: rule-based content-safety classification
//!
//! Labels text, URLs, email addresses, and decoded QR payloads as Safe or
//! Unsafe with human-readable reasons. Heuristic by design: substring and
//! regex matching over fixed tables, no reputation lookups and no learned
//! models.
//!
//! # Example
//!
//! ```
//! use sentra_scan::scan;
//! use sentra_core::{ScanKind, Verdict};
//!
//! let result = scan(ScanKind::Url, "http://192.168.1.5/install.exe");
//! assert_eq!(result.verdict, Verdict::Unsafe);
//! ```

pub mod classifier;
pub mod heuristics;
pub mod rules;

pub use classifier::{scan, ContentClassifier};
pub use rules::RuleSet;
