use crate::config::types::{Config, CrawlerConfig, ExtractionConfig, HttpConfig, RelevanceConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_extraction_config(&config.extraction)?;
    validate_relevance_config(&config.relevance)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawl budget configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.concurrency_limit < 1 || config.concurrency_limit > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrency_limit must be between 1 and 100, got {}",
            config.concurrency_limit
        )));
    }

    if config.links_per_page_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "links_per_page_cap must be >= 1, got {}",
            config.links_per_page_cap
        )));
    }

    Ok(())
}

/// Validates extraction configuration
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.max_paragraphs < 1 || config.max_headings < 1 {
        return Err(ConfigError::Validation(format!(
            "max_paragraphs and max_headings must be >= 1, got {} and {}",
            config.max_paragraphs, config.max_headings
        )));
    }

    if config.untitled.trim().is_empty() {
        return Err(ConfigError::Validation(
            "untitled placeholder cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates relevance configuration
fn validate_relevance_config(config: &RelevanceConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.similarity_threshold) {
        return Err(ConfigError::Validation(format!(
            "similarity_threshold must be between 0.0 and 1.0, got {}",
            config.similarity_threshold
        )));
    }

    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "keywords cannot be empty".to_string(),
        ));
    }

    if let Some(blank) = config.keywords.iter().find(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "keywords cannot contain blank entries, got '{}'",
            blank
        )));
    }

    Ok(())
}

/// Validates HTTP session configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    for (name, secs) in [
        ("request_timeout_secs", config.request_timeout_secs),
        ("total_timeout_secs", config.total_timeout_secs),
        ("connect_timeout_secs", config.connect_timeout_secs),
    ] {
        if secs == 0 {
            return Err(ConfigError::Validation(format!("{} must be > 0", name)));
        }
    }

    if config.max_connections_per_host < 1 {
        return Err(ConfigError::Validation(format!(
            "max_connections_per_host must be >= 1, got {}",
            config.max_connections_per_host
        )));
    }

    if config.max_connections < config.max_connections_per_host {
        return Err(ConfigError::Validation(format!(
            "max_connections ({}) must be >= max_connections_per_host ({})",
            config.max_connections, config.max_connections_per_host
        )));
    }

    Ok(())
}
