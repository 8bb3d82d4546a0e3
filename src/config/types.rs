use serde::Deserialize;

/// Main configuration structure for webaudit
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub features: FeaturesConfig,
    pub crawling: CrawlingConfig,
    pub website: WebsiteConfig,
    #[serde(rename = "spell-checking")]
    pub spell_checking: SpellCheckingConfig,
    #[serde(rename = "text-extraction", default)]
    pub text_extraction: TextExtractionConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
    pub reporting: ReportingConfig,
}

/// Feature toggles; each can be overridden from the command line
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    /// Whether spell checking runs at all
    #[serde(rename = "spell-check", default = "default_true")]
    pub spell_check: bool,

    /// Whether link checking runs at all
    #[serde(rename = "link-check", default = "default_true")]
    pub link_check: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            spell_check: true,
            link_check: true,
        }
    }
}

/// Discovery and link-probe behavior
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlingConfig {
    /// Whether to attempt sitemap-based discovery first
    #[serde(rename = "use-sitemap", default = "default_true")]
    pub use_sitemap: bool,

    /// Explicit sitemap URL; when unset, conventional paths are probed
    #[serde(rename = "sitemap-url", default)]
    pub sitemap_url: Option<String>,

    /// Fall back to breadth-first crawling when the sitemap yields nothing
    #[serde(rename = "recursive-fallback", default = "default_true")]
    pub recursive_fallback: bool,

    /// Whether per-page resources and outbound links are probed
    #[serde(rename = "check-external-links", default = "default_true")]
    pub check_external_links: bool,

    /// Timeout for resource reachability probes (seconds)
    #[serde(rename = "external-link-timeout-secs", default = "default_probe_timeout")]
    pub external_link_timeout_secs: u64,

    /// Glob patterns a page URL must match to be processed (empty = all)
    #[serde(rename = "include-patterns", default)]
    pub include_patterns: Vec<String>,

    /// Glob patterns that drop a page URL regardless of include patterns
    #[serde(rename = "exclude-patterns", default)]
    pub exclude_patterns: Vec<String>,
}

/// Crawl budget configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteConfig {
    /// Maximum depth for the breadth-first fallback crawl
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of pages to process per run
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Pause between successive fetches during the fallback crawl (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

/// Dictionary and tokenization configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpellCheckingConfig {
    /// Language code of the base dictionary (e.g. "en")
    pub language: String,

    /// Directory holding base dictionaries, one `<language>.txt` per language
    #[serde(rename = "dictionary-dir", default = "default_dictionary_dir")]
    pub dictionary_dir: String,

    /// Additional word-list files merged into the dictionary
    #[serde(rename = "custom-dictionaries", default)]
    pub custom_dictionaries: Vec<String>,

    /// Minimum token length considered for spell checking
    #[serde(rename = "min-word-length", default = "default_min_word_length")]
    pub min_word_length: usize,

    /// When false, capitalized tokens are skipped as probable proper nouns
    #[serde(rename = "check-proper-nouns", default)]
    pub check_proper_nouns: bool,
}

/// Elements stripped before text extraction
#[derive(Debug, Clone, Deserialize)]
pub struct TextExtractionConfig {
    #[serde(rename = "ignore-elements", default = "default_ignore_elements")]
    pub ignore_elements: Vec<String>,
}

impl Default for TextExtractionConfig {
    fn default() -> Self {
        Self {
            ignore_elements: default_ignore_elements(),
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceConfig {
    /// Number of pages processed concurrently after discovery
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Maximum number of correction candidates per finding
    #[serde(rename = "max-suggestions", default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Characters of context captured on each side of a flagged word
    #[serde(rename = "context-length", default = "default_context_length")]
    pub context_length: usize,

    /// Directory reports are written into
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// Whether the HTML report is generated
    #[serde(rename = "html-report", default = "default_true")]
    pub html_report: bool,

    /// Whether the CSV reports are generated
    #[serde(rename = "csv-report", default = "default_true")]
    pub csv_report: bool,
}

fn default_true() -> bool {
    true
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_dictionary_dir() -> String {
    "./dictionaries".to_string()
}

fn default_min_word_length() -> usize {
    4
}

fn default_ignore_elements() -> Vec<String> {
    ["script", "style", "nav", "footer", "header"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_workers() -> usize {
    5
}

fn default_max_suggestions() -> usize {
    3
}

fn default_context_length() -> usize {
    50
}
