use crate::discovery::DiscoveredUrl;
use crate::url::matcher::compile_glob;
use crate::UrlError;
use regex::Regex;
use std::collections::HashSet;

/// Include/exclude filter applied to discovered page URLs
///
/// Exclusion always wins: a URL matching any exclude pattern is dropped even
/// when it also matches an include pattern. With no include patterns, every
/// non-excluded URL is kept.
pub struct UrlFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl UrlFilter {
    /// Creates a filter from glob pattern lists
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Globs a URL must match to survive (empty = all)
    /// * `exclude_patterns` - Globs that drop a URL unconditionally
    ///
    /// # Returns
    ///
    /// * `Ok(UrlFilter)` - Filter with all patterns compiled
    /// * `Err(UrlError)` - A pattern failed to compile
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self, UrlError> {
        let include = compile_patterns(include_patterns)?;
        let exclude = compile_patterns(exclude_patterns)?;

        Ok(Self { include, exclude })
    }

    /// Applies the filter to a set of discovered URLs
    pub fn filter(&self, urls: HashSet<DiscoveredUrl>) -> HashSet<DiscoveredUrl> {
        urls.into_iter()
            .filter(|discovered| self.keeps(&discovered.url))
            .collect()
    }

    /// Checks whether a single URL survives the filter
    pub fn keeps(&self, url: &str) -> bool {
        if self.exclude.iter().any(|re| re.is_match(url)) {
            return false;
        }

        if self.include.is_empty() {
            return true;
        }

        self.include.iter().any(|re| re.is_match(url))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, UrlError> {
    patterns
        .iter()
        .map(|pattern| {
            compile_glob(pattern)
                .map_err(|e| UrlError::InvalidPattern(format!("'{}': {}", pattern, e)))
        })
        .collect()
}
