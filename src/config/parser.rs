use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use campus_crawl::config::load_config;
///
/// let config = load_config(Path::new("crawl.toml")).unwrap();
/// println!("Max depth: {}", config.crawler.max_depth);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so crawl output can be tied back to the configuration
/// that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-depth = 3
max-pages = 40
concurrency-limit = 4
links-per-page-cap = 8

[extraction]
paragraph-min-length = 30
untitled = "Untitled"

[relevance]
similarity-threshold = 0.7
keywords = ["library", "hostel"]

[http]
user-agent = "TestCrawler/1.0"
request-timeout-secs = 5
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_depth, 3);
        assert_eq!(config.crawler.max_pages, 40);
        assert_eq!(config.crawler.concurrency_limit, 4);
        assert_eq!(config.crawler.links_per_page_cap, 8);
        assert_eq!(config.extraction.paragraph_min_length, 30);
        assert_eq!(config.extraction.max_paragraphs, 50);
        assert_eq!(config.extraction.untitled, "Untitled");
        assert_eq!(config.relevance.keywords, vec!["library", "hostel"]);
        assert_eq!(config.http.user_agent, "TestCrawler/1.0");
        assert_eq!(config.http.request_timeout_secs, 5);
        assert_eq!(config.http.max_connections_per_host, 5);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.crawler.max_depth, 2);
        assert_eq!(config.crawler.max_pages, 20);
        assert_eq!(config.crawler.concurrency_limit, 3);
        assert_eq!(config.crawler.links_per_page_cap, 5);
        assert_eq!(config.extraction.paragraph_min_length, 20);
        assert!((config.relevance.similarity_threshold - 0.60).abs() < f64::EPSILON);
        assert_eq!(config.relevance.keywords.len(), 13);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/crawl.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
concurrency-limit = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("[crawler]\nmax-depth = 1\n");
        let file2 = create_temp_config("[crawler]\nmax-depth = 2\n");

        let (_, hash1) = load_config_with_hash(file1.path()).unwrap();
        let (_, hash2) = load_config_with_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
