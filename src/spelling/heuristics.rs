use regex::Regex;

/// Characters of context inspected on each side of a candidate word
const CONTEXT_RADIUS: usize = 30;

/// Fragments of well-known site names; a word matching one of these inside
/// text that mentions the site is not a misspelling
const KNOWN_SITE_FRAGMENTS: [&str; 14] = [
    "familysearch",
    "ancestry",
    "myheritage",
    "findmypast",
    "genealogybank",
    "familytree",
    "rootsweb",
    "geni",
    "wikitree",
    "billiongraves",
    "findagrave",
    "newspapers",
    "chroniclingamerica",
    "familytreemagazine",
];

/// Suppresses dictionary misses that are really email or domain fragments
///
/// Tokenization splits `info@example.org` into `info`, `example`, and `org`,
/// none of which belong in a prose dictionary. This filter inspects the text
/// around each candidate word and drops it when the surrounding characters
/// form an email address, a domain name, or a reference to a well-known
/// site. The trade-off is deliberate: a genuine misspelling sitting inside
/// an email address goes unreported, and a word like "tech" near an
/// unrelated mention of "techcompany.com" may be wrongly suppressed.
pub struct FragmentFilter {
    email_patterns: Vec<Regex>,
    domain_patterns: Vec<Regex>,
    compound_domain: Regex,
}

impl FragmentFilter {
    /// Compiles the filter's patterns
    pub fn new() -> Result<Self, regex::Error> {
        let email_patterns = vec![
            Regex::new(r"(?i)\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b")?,
            // Emails with stray whitespace around the separators
            Regex::new(r"(?i)\b[a-zA-Z0-9._%+-]+\s*@\s*[a-zA-Z0-9.-]+\s*\.\s*[a-zA-Z]{2,}\b")?,
        ];

        let domain_patterns = vec![
            Regex::new(
                r"(?i)\b[a-zA-Z0-9.-]+\.(com|org|net|edu|gov|info|biz|co\.uk|ca|au|de|fr|it|es|ru|jp|cn|in)\b",
            )?,
            Regex::new(r"(?i)\bwww\.[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b")?,
            Regex::new(r"(?i)\bhttps?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}[^\s]*\b")?,
        ];

        let compound_domain =
            Regex::new(r"(?i)\b[a-zA-Z]+[a-zA-Z0-9]*\.(com|org|net|edu|gov|info)\b")?;

        Ok(Self {
            email_patterns,
            domain_patterns,
            compound_domain,
        })
    }

    /// Checks whether a flagged word is part of an email address or domain
    ///
    /// # Arguments
    ///
    /// * `word` - The flagged token
    /// * `text` - The full text the token was found in
    /// * `start` - Byte offset of the token's first character
    /// * `end` - Byte offset just past the token's last character
    pub fn is_fragment(&self, word: &str, text: &str, start: usize, end: usize) -> bool {
        let (context, word_start) = context_window(text, start, end, CONTEXT_RADIUS);

        for pattern in &self.email_patterns {
            if overlaps(pattern, context, word_start) {
                return true;
            }
        }

        for pattern in &self.domain_patterns {
            if overlaps(pattern, context, word_start) {
                return true;
            }
        }

        // Words embedded inside a compound domain name, like "tech" in
        // "techcompany.com". Only the label counts, not the TLD text.
        if word.len() >= 4 {
            for m in self.compound_domain.find_iter(context) {
                let label = m.as_str().split('.').next().unwrap_or("").to_lowercase();
                if label.contains(&word.to_lowercase()) {
                    return true;
                }
            }
        }

        // Fragments of well-known site names mentioned nearby
        if word.len() >= 4 {
            let word_lower = word.to_lowercase();
            let context_lower = context.to_lowercase();
            for site in KNOWN_SITE_FRAGMENTS {
                if site.contains(&word_lower) && context_lower.contains(site) {
                    return true;
                }
            }
        }

        false
    }
}

/// Checks whether any match of the pattern covers the word's start position
fn overlaps(pattern: &Regex, context: &str, word_start: usize) -> bool {
    pattern
        .find_iter(context)
        .any(|m| m.start() <= word_start && word_start < m.end())
}

/// Slices a character-bounded window around a word
///
/// Returns the window and the word's byte offset within it. The window
/// extends up to `radius` characters on each side of the word, clamped to
/// the text's bounds.
pub(crate) fn context_window(
    text: &str,
    start: usize,
    end: usize,
    radius: usize,
) -> (&str, usize) {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);

    let window_end = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    (&text[window_start..window_end], start - window_start)
}
