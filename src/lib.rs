//! Webaudit: a website content and link-integrity auditor
//!
//! This crate implements a site health checker that discovers a website's
//! pages (sitemap first, bounded breadth-first crawl as a fallback), flags
//! likely spelling mistakes in their text while suppressing false positives
//! from email- and domain-like tokens, and validates every linked or embedded
//! resource for reachability.

pub mod audit;
pub mod config;
pub mod discovery;
pub mod links;
pub mod report;
pub mod spelling;
pub mod text;
pub mod url;

use thiserror::Error;

/// Main error type for webaudit operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for webaudit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{run_audit, AuditOutcome, Coordinator, RunStats, StatsSnapshot};
pub use config::Config;
pub use links::{BrokenLink, Locality, ProbeStatus, Resource, ResourceKind};
pub use spelling::SpellingFinding;
