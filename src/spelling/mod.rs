//! Spell checking
//!
//! Tokenizes extracted page text, looks words up in a merged dictionary,
//! filters out email and domain fragments that only look misspelled, and
//! produces findings with context and correction candidates.

pub mod dictionary;
pub mod engine;
pub mod heuristics;

pub use dictionary::Dictionary;
pub use engine::SpellingEngine;
pub use heuristics::FragmentFilter;

/// A probable misspelling found on a page
#[derive(Debug, Clone)]
pub struct SpellingFinding {
    /// URL of the page the word appeared on
    pub source_page: String,
    /// The word exactly as it appeared
    pub word: String,
    /// Lowercase form, used for aggregation
    pub word_lower: String,
    /// Correction candidates, best first
    pub suggestions: Vec<String>,
    /// Surrounding text captured around the word
    pub context: String,
    /// Byte offset of the word within the page's extracted text
    pub offset: usize,
    /// Confidence that this is a genuine misspelling, 0.0 to 1.0
    pub confidence: f64,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
}
