use crate::links::{BrokenLink, Locality, ProbeStatus, Resource, ResourceKind};
use crate::url::{is_internal_url, is_valid_url};
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Probes resources for reachability with run-wide deduplication
///
/// Every probe target is claimed in a shared set before the request is
/// issued, so concurrent page workers never probe the same URL twice.
pub struct LinkChecker {
    client: Client,
    timeout: Duration,
    probed: Mutex<HashSet<String>>,
}

impl LinkChecker {
    /// Creates a checker
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client; redirects are followed
    /// * `timeout` - Per-probe timeout
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            probed: Mutex::new(HashSet::new()),
        }
    }

    /// Decides whether a resource warrants a reachability probe
    ///
    /// Internal hyperlinks are skipped because the page discovery pass
    /// already visits them. Everything else with a valid URL is probed:
    /// external links plus embedded assets regardless of locality.
    pub fn should_probe(resource: &Resource) -> bool {
        if !is_valid_url(&resource.url) {
            return false;
        }

        if !is_internal_url(&resource.url, &resource.source_page) {
            return true;
        }

        matches!(
            resource.kind,
            ResourceKind::Image
                | ResourceKind::Document
                | ResourceKind::Stylesheet
                | ResourceKind::Script
                | ResourceKind::Media
        )
    }

    /// Probes a resource, returning a record only when it is broken
    ///
    /// Returns None when the resource does not warrant probing, was already
    /// probed this run, or responded with a non-error status.
    pub async fn check(&self, resource: &Resource) -> Option<BrokenLink> {
        if !Self::should_probe(resource) {
            return None;
        }

        if !self.claim(&resource.url) {
            return None;
        }

        tracing::debug!("Probing {}", resource.url);

        let locality = if is_internal_url(&resource.url, &resource.source_page) {
            Locality::Internal
        } else {
            Locality::External
        };

        let (status, reason) = match self
            .client
            .get(&resource.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => {
                let code = response.status().as_u16();
                if code < 400 {
                    return None;
                }
                (ProbeStatus::Http(code), format!("HTTP {}", code))
            }
            Err(e) if e.is_timeout() => (
                ProbeStatus::Timeout,
                format!("Request timeout after {} seconds", self.timeout.as_secs()),
            ),
            Err(e) if e.is_connect() => (ProbeStatus::ConnectionError, "Connection failed".to_string()),
            Err(e) => (ProbeStatus::Error, e.to_string().chars().take(100).collect()),
        };

        tracing::debug!("Broken: {} ({})", resource.url, status);

        Some(BrokenLink {
            resource: resource.clone(),
            status,
            reason,
            locality,
            timestamp: chrono::Local::now().to_rfc3339(),
        })
    }

    /// Number of unique URLs probed so far this run
    pub fn probed_count(&self) -> usize {
        self.probed.lock().unwrap().len()
    }

    /// Atomically claims a URL; returns false when it was already claimed
    fn claim(&self, url: &str) -> bool {
        self.probed.lock().unwrap().insert(url.to_string())
    }
}
