//! Configuration loading and validation
//!
//! The configuration is a TOML file describing which features run, how
//! discovery behaves, the spell-checking dictionary setup, and where reports
//! are written. Loading is split into parsing (`parser`) and semantic
//! validation (`validation`).

pub mod parser;
pub mod types;
pub mod validation;

pub use parser::load_config;
pub use types::{
    Config, CrawlingConfig, FeaturesConfig, PerformanceConfig, ReportingConfig,
    SpellCheckingConfig, TextExtractionConfig, WebsiteConfig,
};
