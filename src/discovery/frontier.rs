use crate::discovery::DiscoveredUrl;
use crate::url::{is_internal_url, is_valid_url};
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Link schemes and fragments skipped during crawl expansion
const SKIPPED_PREFIXES: [&str; 4] = ["mailto:", "javascript:", "tel:", "#"];

/// Discovers pages by breadth-first crawling from a seed URL
///
/// Only internal pages are visited. Pages at the maximum depth are still
/// fetched and recorded but their links are not expanded. The crawl pauses
/// for `delay` after each successful fetch.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `seed` - Starting page URL
/// * `max_depth` - Depth beyond which links are not followed
/// * `max_pages` - Hard cap on visited pages
/// * `delay` - Pause between successive fetches
///
/// # Returns
///
/// The set of successfully fetched internal pages, each tagged with the
/// depth it was reached at.
pub async fn crawl_site(
    client: &Client,
    seed: &str,
    max_depth: u32,
    max_pages: usize,
    delay: Duration,
) -> HashSet<DiscoveredUrl> {
    let mut discovered = HashSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();

    queue.push_back((seed.to_string(), 0));

    while let Some((url, depth)) = queue.pop_front() {
        // The budget caps discovered pages; failed fetches do not consume it
        if discovered.len() >= max_pages {
            tracing::info!("Crawl reached the page limit of {}", max_pages);
            break;
        }

        if !visited.insert(url.clone()) {
            continue;
        }

        tracing::debug!("Crawling {} at depth {}", url, depth);

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", url, e);
                continue;
            }
        };

        if response.status() == reqwest::StatusCode::OK {
            match response.text().await {
                Ok(body) => {
                    discovered.insert(DiscoveredUrl::at_depth(url.clone(), depth));

                    if depth < max_depth {
                        for link in extract_crawl_links(&body, &url) {
                            if !visited.contains(&link) {
                                queue.push_back((link, depth + 1));
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", url, e);
                }
            }
        } else {
            tracing::debug!("Skipping {} ({})", url, response.status());
        }

        // One pause per completed request, whatever its status
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::info!("Crawl discovered {} pages", discovered.len());
    discovered
}

/// Extracts followable internal page links from an HTML document
fn extract_crawl_links(html: &str, base_url: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(_) => return Vec::new(),
    };

    let document = Html::parse_document(html);
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) => href.trim(),
            None => continue,
        };

        if href.is_empty() || SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
            continue;
        }

        let resolved = match base.join(href) {
            Ok(url) => {
                let mut url = url;
                url.set_fragment(None);
                url.to_string()
            }
            Err(_) => continue,
        };

        if is_valid_url(&resolved) && is_internal_url(&resolved, base_url) {
            links.push(resolved);
        }
    }

    links
}
