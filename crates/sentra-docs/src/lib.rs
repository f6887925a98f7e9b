//! Sentra-Docs: heuristic legal-document analysis
//!
//! Validates that an uploaded document is legal in nature (keyword
//! density gate), extracts structured facts (names, dates, legal terms),
//! flags risky contractual phrases, and composes a plain-language
//! summary. Pure functions over static rule tables; behavior is tuned
//! through an [`AnalyzerProfile`].
//!
//! # Example
//!
//! ```
//! use sentra_docs::{DocumentAnalyzer, DocumentSource};
//!
//! let analyzer = DocumentAnalyzer::default();
//! let source = DocumentSource::new(
//!     "nda.txt",
//!     Some("text/plain".to_string()),
//!     b"This agreement imposes liability for breach, with disputes going to binding arbitration.".to_vec(),
//! );
//!
//! let analysis = analyzer.analyze(&source).unwrap();
//! assert!(analysis.is_legal_document);
//! assert_eq!(analysis.risky_phrases, vec!["binding arbitration"]);
//! ```

pub mod analyzer;
pub mod extract_text;
pub mod facts;
pub mod gate;
pub mod keywords;
pub mod profile;
pub mod risk;
pub mod summary;

pub use analyzer::{DocsError, DocumentAnalyzer};
pub use extract_text::{DocumentSource, TextExtractor};
pub use facts::FactExtractor;
pub use gate::LegalDocumentGate;
pub use profile::AnalyzerProfile;
pub use risk::{find_risky_phrases, RiskPhraseDetector};
pub use summary::summarize;
