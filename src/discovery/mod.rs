//! Page discovery
//!
//! Two strategies produce the set of pages to audit:
//! - Sitemap resolution, including recursive sitemap-index expansion
//! - Breadth-first crawling from the seed URL as a fallback
//!
//! Both yield [`DiscoveredUrl`] values; the set deduplicates on the URL
//! string alone so a page found by both strategies appears once.

pub mod frontier;
pub mod sitemap;

pub use frontier::crawl_site;
pub use sitemap::SitemapResolver;

/// How a page URL entered the audit set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Listed in a sitemap or sitemap index
    Sitemap,
    /// Reached by the breadth-first fallback crawl
    Crawl,
}

/// A page URL slated for auditing
///
/// Equality and hashing consider only the URL so that discovery sets
/// deduplicate across strategies and depths.
#[derive(Debug, Clone)]
pub struct DiscoveredUrl {
    /// Absolute page URL
    pub url: String,
    /// Discovery strategy that produced this entry
    pub provenance: Provenance,
    /// Crawl depth from the seed; None for sitemap entries
    pub depth: Option<u32>,
}

impl DiscoveredUrl {
    pub fn new(url: String, provenance: Provenance) -> Self {
        Self {
            url,
            provenance,
            depth: None,
        }
    }

    pub fn at_depth(url: String, depth: u32) -> Self {
        Self {
            url,
            provenance: Provenance::Crawl,
            depth: Some(depth),
        }
    }
}

impl PartialEq for DiscoveredUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for DiscoveredUrl {}

impl std::hash::Hash for DiscoveredUrl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}
