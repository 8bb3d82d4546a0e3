use crate::discovery::{DiscoveredUrl, Provenance};
use reqwest::Client;
use sitemap::reader::{SiteMapEntity, SiteMapReader};
use std::collections::HashSet;
use std::io::Cursor;
use std::time::Duration;
use url::Url;

/// Conventional sitemap locations probed when no explicit URL is configured
const CONVENTIONAL_PATHS: [&str; 3] = ["/sitemap.xml", "/sitemap_index.xml", "/sitemap"];

/// Timeout applied to every sitemap fetch
const SITEMAP_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves page URLs from a site's sitemap
///
/// Sitemap indexes are expanded recursively with cycle protection, so an
/// index that references itself or forms a loop still terminates. Failures
/// on individual branches are logged and skipped rather than aborting the
/// whole resolution.
pub struct SitemapResolver {
    client: Client,
    configured_url: Option<String>,
}

impl SitemapResolver {
    /// Creates a resolver
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client for sitemap fetches
    /// * `configured_url` - Explicit sitemap URL, if the configuration names one
    pub fn new(client: Client, configured_url: Option<String>) -> Self {
        Self {
            client,
            configured_url,
        }
    }

    /// Resolves the full set of page URLs reachable from the site's sitemap
    ///
    /// The starting sitemap is chosen in order of precedence: a seed URL
    /// that itself points at a sitemap, the configured sitemap URL, then
    /// the conventional locations under the seed's origin. An empty set
    /// means no sitemap was found or none of its branches yielded pages.
    ///
    /// # Arguments
    ///
    /// * `seed` - The website URL the audit was started with
    pub async fn resolve(&self, seed: &str) -> HashSet<DiscoveredUrl> {
        let mut pages = HashSet::new();

        let start = match self.locate_sitemap(seed).await {
            Some(url) => url,
            None => {
                tracing::info!("No sitemap found for {}", seed);
                return pages;
            }
        };

        tracing::info!("Resolving sitemap at {}", start);

        let mut worklist = vec![start];
        let mut visited: HashSet<String> = HashSet::new();

        while let Some(sitemap_url) = worklist.pop() {
            if !visited.insert(sitemap_url.clone()) {
                continue;
            }

            let body = match self.fetch_sitemap(&sitemap_url).await {
                Some(body) => body,
                None => continue,
            };

            for entity in SiteMapReader::new(Cursor::new(body)) {
                match entity {
                    SiteMapEntity::Url(entry) => {
                        if let Some(loc) = entry.loc.get_url() {
                            pages.insert(DiscoveredUrl::new(
                                loc.to_string(),
                                Provenance::Sitemap,
                            ));
                        }
                    }
                    SiteMapEntity::SiteMap(entry) => {
                        if let Some(loc) = entry.loc.get_url() {
                            let child = loc.to_string();
                            if !visited.contains(&child) {
                                tracing::debug!("Queueing nested sitemap {}", child);
                                worklist.push(child);
                            }
                        }
                    }
                    SiteMapEntity::Err(e) => {
                        tracing::warn!("Malformed entry in {}: {}", sitemap_url, e);
                    }
                }
            }
        }

        tracing::info!("Sitemap resolution found {} pages", pages.len());
        pages
    }

    /// Picks the sitemap URL to start from
    async fn locate_sitemap(&self, seed: &str) -> Option<String> {
        // The seed itself may already point at a sitemap
        if seed.ends_with(".xml") || seed.ends_with("/sitemap") {
            return Some(seed.to_string());
        }

        if let Some(configured) = &self.configured_url {
            return Some(configured.clone());
        }

        let base = Url::parse(seed).ok()?;
        for path in CONVENTIONAL_PATHS {
            let candidate = match base.join(path) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            };

            match self
                .client
                .get(&candidate)
                .timeout(SITEMAP_FETCH_TIMEOUT)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    return Some(candidate);
                }
                Ok(response) => {
                    tracing::debug!("No sitemap at {} ({})", candidate, response.status());
                }
                Err(e) => {
                    tracing::debug!("No sitemap at {}: {}", candidate, e);
                }
            }
        }

        None
    }

    /// Fetches a sitemap document, returning None on any failure
    async fn fetch_sitemap(&self, url: &str) -> Option<Vec<u8>> {
        let response = match self
            .client
            .get(url)
            .timeout(SITEMAP_FETCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch sitemap {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Sitemap {} returned {}", url, response.status());
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                tracing::warn!("Failed to read sitemap {}: {}", url, e);
                None
            }
        }
    }
}
