use crate::audit::{RunStats, StatsSnapshot};
use crate::config::Config;
use crate::discovery::{crawl_site, DiscoveredUrl, SitemapResolver};
use crate::links::{
    extract_resources, BrokenLink, LinkChecker, Locality, ProbeStatus, Resource, ResourceKind,
};
use crate::spelling::{Dictionary, SpellingEngine, SpellingFinding};
use crate::text::{count_words, extract_text};
use crate::url::UrlFilter;
use crate::AuditError;
use futures::stream::{self, StreamExt};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Timeout for fetching a page's HTML
const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source tag recorded when the failing URL is a discovered page itself
/// rather than a resource found on one
const DISCOVERY_SOURCE: &str = "Sitemap discovery";

/// Everything a finished audit produced
#[derive(Debug, Default)]
pub struct AuditOutcome {
    pub findings: Vec<SpellingFinding>,
    pub broken_links: Vec<BrokenLink>,
    pub stats: StatsSnapshot,
}

/// Builds the HTTP client shared by discovery, page fetching, and probes
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(PAGE_FETCH_TIMEOUT)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Orchestrates a full audit run
///
/// Discovery happens first and produces the complete page set; pages are
/// then processed concurrently by a bounded worker pool. Spelling findings
/// flow back through the worker futures while broken links accumulate in a
/// shared vector, since one page can produce many of them from different
/// probe calls.
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    engine: Option<Arc<SpellingEngine>>,
    checker: Arc<LinkChecker>,
    stats: Arc<RunStats>,
    link_check: bool,
}

impl Coordinator {
    /// Creates a coordinator
    ///
    /// # Arguments
    ///
    /// * `config` - Validated run configuration
    /// * `spell_check` - Whether spell checking runs; loads the dictionary
    /// * `link_check` - Whether resource probing runs
    pub fn new(config: Config, spell_check: bool, link_check: bool) -> Result<Self, AuditError> {
        let client = build_http_client()?;

        let engine = if spell_check {
            let dictionary = Dictionary::load(&config.spell_checking);
            if dictionary.is_empty() {
                tracing::warn!("Dictionary is empty; every checked word will be flagged");
            }
            Some(Arc::new(SpellingEngine::new(
                dictionary,
                &config.spell_checking,
                &config.reporting,
            )?))
        } else {
            None
        };

        let checker = Arc::new(LinkChecker::new(
            client.clone(),
            Duration::from_secs(config.crawling.external_link_timeout_secs),
        ));

        Ok(Self {
            config: Arc::new(config),
            client,
            engine,
            checker,
            stats: Arc::new(RunStats::new()),
            link_check,
        })
    }

    /// Runs the audit against a website
    ///
    /// # Arguments
    ///
    /// * `website_url` - Seed URL; also the reference for internal/external
    ///   classification of discovered pages
    pub async fn run(&self, website_url: &str) -> Result<AuditOutcome, AuditError> {
        tracing::info!("Starting audit of {}", website_url);

        let discovered = self.discover(website_url).await;
        tracing::info!("Discovered {} candidate pages", discovered.len());

        let filter = UrlFilter::new(
            &self.config.crawling.include_patterns,
            &self.config.crawling.exclude_patterns,
        )?;
        let filtered = filter.filter(discovered);

        if filtered.is_empty() {
            tracing::warn!("No pages to audit after filtering");
            return Ok(AuditOutcome {
                stats: self.stats.snapshot(),
                ..Default::default()
            });
        }

        let mut pages: Vec<DiscoveredUrl> = filtered.into_iter().collect();
        pages.truncate(self.config.website.max_pages);
        tracing::info!("Auditing {} pages", pages.len());

        let broken = Arc::new(Mutex::new(Vec::new()));

        let findings: Vec<Vec<SpellingFinding>> = stream::iter(pages)
            .map(|page| {
                let broken = Arc::clone(&broken);
                async move { self.process_page(page, broken).await }
            })
            .buffer_unordered(self.config.performance.max_workers)
            .collect()
            .await;

        let findings: Vec<SpellingFinding> = findings.into_iter().flatten().collect();
        let broken_links = std::mem::take(&mut *broken.lock().unwrap());

        let stats = self.stats.snapshot();
        tracing::info!(
            "Audit finished: {} pages processed, {} failed, {} findings, {} broken links",
            stats.pages_processed,
            stats.pages_failed,
            findings.len(),
            broken_links.len()
        );

        Ok(AuditOutcome {
            findings,
            broken_links,
            stats,
        })
    }

    /// Resolves the page set via sitemap, with a crawl fallback
    async fn discover(&self, website_url: &str) -> std::collections::HashSet<DiscoveredUrl> {
        let crawling = &self.config.crawling;

        if crawling.use_sitemap {
            let resolver =
                SitemapResolver::new(self.client.clone(), crawling.sitemap_url.clone());
            let pages = resolver.resolve(website_url).await;
            if !pages.is_empty() {
                return pages;
            }
        }

        if crawling.recursive_fallback {
            tracing::info!("Falling back to breadth-first crawl");
            return crawl_site(
                &self.client,
                website_url,
                self.config.website.max_depth,
                self.config.website.max_pages,
                Duration::from_millis(self.config.website.delay_ms),
            )
            .await;
        }

        std::collections::HashSet::new()
    }

    /// Processes one page: fetch, probe its resources, spell check its text
    async fn process_page(
        &self,
        page: DiscoveredUrl,
        broken: Arc<Mutex<Vec<BrokenLink>>>,
    ) -> Vec<SpellingFinding> {
        tracing::debug!("Processing {}", page.url);

        let response = match self
            .client
            .get(&page.url)
            .timeout(PAGE_FETCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                if self.link_check {
                    broken
                        .lock()
                        .unwrap()
                        .push(page_failure(&page.url, fetch_error_status(&e)));
                }
                self.stats.record_page_failed();
                return Vec::new();
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            let code = response.status().as_u16();
            if self.link_check {
                broken.lock().unwrap().push(page_failure(
                    &page.url,
                    (ProbeStatus::Http(code), format!("HTTP {}", code)),
                ));
            }
            self.stats.record_page_failed();
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                if self.link_check {
                    broken
                        .lock()
                        .unwrap()
                        .push(page_failure(&page.url, fetch_error_status(&e)));
                }
                self.stats.record_page_failed();
                return Vec::new();
            }
        };

        // The config toggle disables resource probing wholesale, internal
        // assets included
        if self.link_check && self.config.crawling.check_external_links {
            self.check_page_resources(&page.url, &body, &broken).await;
        }

        let engine = match &self.engine {
            Some(engine) => engine,
            None => {
                self.stats.record_page_processed();
                return Vec::new();
            }
        };

        let text = extract_text(&body, &self.config.text_extraction.ignore_elements);
        if text.is_empty() {
            tracing::warn!("No text extracted from {}", page.url);
            self.stats.record_page_failed();
            return Vec::new();
        }

        self.stats.add_words_checked(count_words(&text));
        let findings = engine.check(&text, &page.url);
        self.stats.add_errors_found(findings.len() as u64);
        self.stats.record_page_processed();

        findings
    }

    /// Extracts and probes a page's resources
    async fn check_page_resources(
        &self,
        page_url: &str,
        body: &str,
        broken: &Arc<Mutex<Vec<BrokenLink>>>,
    ) {
        let base = match Url::parse(page_url) {
            Ok(base) => base,
            Err(_) => return,
        };

        for resource in extract_resources(body, &base) {
            if let Some(broken_link) = self.checker.check(&resource).await {
                broken.lock().unwrap().push(broken_link);
            }
        }
    }
}

/// Builds a broken-link record for a discovered page that failed to load
fn page_failure(page_url: &str, (status, reason): (ProbeStatus, String)) -> BrokenLink {
    BrokenLink {
        resource: Resource {
            url: page_url.to_string(),
            kind: ResourceKind::Hyperlink,
            source_page: DISCOVERY_SOURCE.to_string(),
        },
        status,
        reason,
        locality: Locality::Internal,
        timestamp: chrono::Local::now().to_rfc3339(),
    }
}

fn fetch_error_status(e: &reqwest::Error) -> (ProbeStatus, String) {
    if e.is_timeout() {
        (
            ProbeStatus::Timeout,
            format!(
                "Request timeout after {} seconds",
                PAGE_FETCH_TIMEOUT.as_secs()
            ),
        )
    } else if e.is_connect() {
        (ProbeStatus::ConnectionError, "Connection failed".to_string())
    } else {
        (ProbeStatus::Error, e.to_string().chars().take(100).collect())
    }
}

/// Runs a complete audit with default wiring
///
/// # Arguments
///
/// * `config` - Validated run configuration
/// * `website_url` - Seed URL to audit
/// * `spell_check` - Whether spell checking runs
/// * `link_check` - Whether resource probing runs
///
/// # Returns
///
/// * `Ok(AuditOutcome)` - Findings, broken links, and statistics
/// * `Err(AuditError)` - Setup failed; per-page failures never abort the run
pub async fn run_audit(
    config: Config,
    website_url: &str,
    spell_check: bool,
    link_check: bool,
) -> crate::Result<AuditOutcome> {
    let coordinator = Coordinator::new(config, spell_check, link_check)?;
    coordinator.run(website_url).await
}
