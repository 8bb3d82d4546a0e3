use crate::config::{ReportingConfig, SpellCheckingConfig};
use crate::spelling::heuristics::context_window;
use crate::spelling::{Dictionary, FragmentFilter, SpellingFinding};
use regex::Regex;

/// Checks extracted page text against the dictionary
///
/// Candidate tokens are alphabetic runs of at least the configured minimum
/// length. Capitalized tokens are treated as proper nouns and skipped unless
/// proper-noun checking is enabled. Tokens the fragment filter attributes to
/// emails or domains are suppressed before any dictionary lookup.
pub struct SpellingEngine {
    dictionary: Dictionary,
    filter: FragmentFilter,
    token_re: Regex,
    check_proper_nouns: bool,
    max_suggestions: usize,
    context_length: usize,
}

impl SpellingEngine {
    /// Creates an engine from a loaded dictionary and configuration
    pub fn new(
        dictionary: Dictionary,
        spell_config: &SpellCheckingConfig,
        reporting: &ReportingConfig,
    ) -> Result<Self, regex::Error> {
        let token_re = Regex::new(&format!(
            r"\b[a-zA-Z]{{{},}}\b",
            spell_config.min_word_length
        ))?;

        Ok(Self {
            dictionary,
            filter: FragmentFilter::new()?,
            token_re,
            check_proper_nouns: spell_config.check_proper_nouns,
            max_suggestions: reporting.max_suggestions,
            context_length: reporting.context_length,
        })
    }

    /// Checks a page's text and returns one finding per flagged token
    ///
    /// # Arguments
    ///
    /// * `text` - Extracted visible text of the page
    /// * `source_page` - Page URL recorded on each finding
    pub fn check(&self, text: &str, source_page: &str) -> Vec<SpellingFinding> {
        let mut findings = Vec::new();

        for m in self.token_re.find_iter(text) {
            let word = m.as_str();

            if !self.check_proper_nouns && is_probable_proper_noun(word) {
                continue;
            }

            if self.filter.is_fragment(word, text, m.start(), m.end()) {
                continue;
            }

            if self.dictionary.contains(word) {
                continue;
            }

            let (context, _) = context_window(text, m.start(), m.end(), self.context_length);

            findings.push(SpellingFinding {
                source_page: source_page.to_string(),
                word: word.to_string(),
                word_lower: word.to_lowercase(),
                suggestions: self.dictionary.suggest(word, self.max_suggestions),
                context: context.trim().to_string(),
                offset: m.start(),
                confidence: confidence_for(word),
                timestamp: chrono::Local::now().to_rfc3339(),
            });
        }

        findings
    }
}

/// Shorter words are more likely to be obscure but legitimate, so confidence
/// grows with word length
fn confidence_for(word: &str) -> f64 {
    1.0 - (word.len() as f64 / 20.0)
}

fn is_probable_proper_noun(word: &str) -> bool {
    word.len() > 1
        && word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
}
