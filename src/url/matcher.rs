use regex::Regex;

/// Compiles a glob pattern into a case-insensitive anchored regex
///
/// Supports `*` (any run of characters, including none) and `?` (exactly one
/// character). Every other character matches literally.
///
/// # Arguments
///
/// * `pattern` - Glob pattern such as `*/blog/*` or `*.pdf`
///
/// # Returns
///
/// * `Ok(Regex)` - Compiled matcher
/// * `Err(regex::Error)` - The translated pattern failed to compile
pub fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push_str("(?i)^");

    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push_str(&regex::escape(&other.to_string())),
        }
    }

    translated.push('$');
    Regex::new(&translated)
}

/// Checks whether a candidate string matches a glob pattern
///
/// Matching is case-insensitive and the pattern must cover the entire
/// candidate. Returns false when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use webaudit::url::matches_glob;
///
/// assert!(matches_glob("*/blog/*", "https://example.com/blog/post"));
/// assert!(!matches_glob("*/blog/*", "https://example.com/about"));
/// ```
pub fn matches_glob(pattern: &str, candidate: &str) -> bool {
    match compile_glob(pattern) {
        Ok(re) => re.is_match(candidate),
        Err(_) => false,
    }
}
