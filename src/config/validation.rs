use crate::config::types::{
    Config, CrawlingConfig, PerformanceConfig, ReportingConfig, SpellCheckingConfig, WebsiteConfig,
};
use crate::url::matcher::compile_glob;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawling_config(&config.crawling)?;
    validate_website_config(&config.website)?;
    validate_spell_checking_config(&config.spell_checking)?;
    validate_performance_config(&config.performance)?;
    validate_reporting_config(&config.reporting)?;
    Ok(())
}

/// Validates discovery and probe configuration
fn validate_crawling_config(config: &CrawlingConfig) -> Result<(), ConfigError> {
    if let Some(sitemap_url) = &config.sitemap_url {
        Url::parse(sitemap_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid sitemap-url '{}': {}", sitemap_url, e)))?;
    }

    if config.external_link_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "external-link-timeout-secs must be >= 1, got {}",
            config.external_link_timeout_secs
        )));
    }

    for pattern in config
        .include_patterns
        .iter()
        .chain(config.exclude_patterns.iter())
    {
        compile_glob(pattern)
            .map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
    }

    Ok(())
}

/// Validates crawl budgets
fn validate_website_config(config: &WebsiteConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    Ok(())
}

/// Validates spell-checking configuration
fn validate_spell_checking_config(config: &SpellCheckingConfig) -> Result<(), ConfigError> {
    if config.language.is_empty() {
        return Err(ConfigError::Validation(
            "language cannot be empty".to_string(),
        ));
    }

    if !config
        .language
        .chars()
        .all(|c| c.is_ascii_lowercase() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "language must be a lowercase language code, got '{}'",
            config.language
        )));
    }

    if config.min_word_length < 1 {
        return Err(ConfigError::Validation(format!(
            "min-word-length must be >= 1, got {}",
            config.min_word_length
        )));
    }

    Ok(())
}

/// Validates worker pool configuration
fn validate_performance_config(config: &PerformanceConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > 100 {
        return Err(ConfigError::Validation(format!(
            "max-workers must be between 1 and 100, got {}",
            config.max_workers
        )));
    }

    Ok(())
}

/// Validates reporting configuration
fn validate_reporting_config(config: &ReportingConfig) -> Result<(), ConfigError> {
    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    if config.max_suggestions < 1 {
        return Err(ConfigError::Validation(format!(
            "max-suggestions must be >= 1, got {}",
            config.max_suggestions
        )));
    }

    if config.context_length < 1 {
        return Err(ConfigError::Validation(format!(
            "context-length must be >= 1, got {}",
            config.context_length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{FeaturesConfig, TextExtractionConfig};

    fn base_config() -> Config {
        Config {
            features: FeaturesConfig::default(),
            crawling: CrawlingConfig {
                use_sitemap: true,
                sitemap_url: None,
                recursive_fallback: true,
                check_external_links: true,
                external_link_timeout_secs: 10,
                include_patterns: vec![],
                exclude_patterns: vec![],
            },
            website: WebsiteConfig {
                max_depth: 3,
                max_pages: 100,
                delay_ms: 500,
            },
            spell_checking: SpellCheckingConfig {
                language: "en".to_string(),
                dictionary_dir: "./dictionaries".to_string(),
                custom_dictionaries: vec![],
                min_word_length: 4,
                check_proper_nouns: false,
            },
            text_extraction: TextExtractionConfig::default(),
            performance: PerformanceConfig { max_workers: 5 },
            reporting: ReportingConfig {
                max_suggestions: 3,
                context_length: 50,
                output_dir: "./reports".to_string(),
                html_report: true,
                csv_report: true,
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&base_config()).is_ok());
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let mut config = base_config();
        config.website.max_pages = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_invalid_sitemap_url_rejected() {
        let mut config = base_config();
        config.crawling.sitemap_url = Some("not a url".to_string());
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = base_config();
        config.performance.max_workers = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_workers_rejected() {
        let mut config = base_config();
        config.performance.max_workers = 200;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_language_rejected() {
        let mut config = base_config();
        config.spell_checking.language = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let mut config = base_config();
        config.reporting.output_dir = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_patterns_accepted() {
        let mut config = base_config();
        config.crawling.include_patterns = vec!["*/blog/*".to_string()];
        config.crawling.exclude_patterns = vec!["*/draft/*".to_string(), "*?preview=1".to_string()];
        assert!(validate(&config).is_ok());
    }
}
