use serde::Deserialize;

/// Keywords that mark a link as worth following
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "faq",
    "admission",
    "application",
    "enroll",
    "fee",
    "contact",
    "course",
    "campus",
    "program",
    "eligibility",
    "academic",
    "student",
    "faculty",
];

/// Browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Main configuration structure for campus-crawl
///
/// Every section and key is optional; missing values fall back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub extraction: ExtractionConfig,
    pub relevance: RelevanceConfig,
    pub http: HttpConfig,
}

/// Crawl budget configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of link hops from the seed
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of pages scheduled for fetching in one run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Maximum number of fetches in flight across the whole run
    #[serde(rename = "concurrency-limit")]
    pub concurrency_limit: u32,

    /// Maximum number of links followed from a single page
    #[serde(rename = "links-per-page-cap")]
    pub links_per_page_cap: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_pages: 20,
            concurrency_limit: 3,
            links_per_page_cap: 5,
        }
    }
}

/// Page content extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Paragraphs whose trimmed length is at most this many characters are dropped
    #[serde(rename = "paragraph-min-length")]
    pub paragraph_min_length: usize,

    #[serde(rename = "max-paragraphs")]
    pub max_paragraphs: usize,

    #[serde(rename = "max-headings")]
    pub max_headings: usize,

    /// Title used when the document has none
    pub untitled: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            paragraph_min_length: 20,
            max_paragraphs: 50,
            max_headings: 20,
            untitled: "No Title".to_string(),
        }
    }
}

/// Link relevance configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Similarity ratio a keyword must exceed to count as a match
    #[serde(rename = "similarity-threshold")]
    pub similarity_threshold: f64,

    pub keywords: Vec<String>,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.60,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// HTTP session and connection pool configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Timeout for a single page request, including the body
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Upper bound for any request issued by the session
    #[serde(rename = "total-timeout-secs")]
    pub total_timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of open connections across all hosts
    #[serde(rename = "max-connections")]
    pub max_connections: u32,

    /// Maximum number of open connections to a single host
    #[serde(rename = "max-connections-per-host")]
    pub max_connections_per_host: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 10,
            total_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_connections: 10,
            max_connections_per_host: 5,
        }
    }
}
