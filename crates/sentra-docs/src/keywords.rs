//! Fixed vocabulary for the legal-document pipeline.
//!
//! Both lists are ordered; detectors report hits in table order.

/// Terms whose density gates whether text is treated as a legal document.
/// Also the source list for term extraction.
pub const LEGAL_KEYWORDS: [&str; 20] = [
    "agreement",
    "contract",
    "party",
    "parties",
    "hereby",
    "whereas",
    "shall",
    "pursuant",
    "hereinafter",
    "consideration",
    "covenant",
    "liability",
    "indemnify",
    "jurisdiction",
    "governing law",
    "arbitration",
    "dispute",
    "breach",
    "termination",
    "amendment",
];

/// Contractual phrases likely to indicate an unfavorable or unclear term.
pub const RISKY_PHRASES: [&str; 13] = [
    "without limitation",
    "as is",
    "no warranty",
    "unlimited liability",
    "irrevocable",
    "perpetual",
    "automatic renewal",
    "binding arbitration",
    "waive",
    "forfeit",
    "sole discretion",
    "may change at any time",
    "without notice",
];
