//! Link relevance filtering
//!
//! Decides whether an anchor is worth following by looking for domain
//! keywords in the joined `href + " " + text` string, either as a literal
//! substring or as a close sequence match.

mod similarity;

pub use similarity::similarity_ratio;

use crate::config::{RelevanceConfig, DEFAULT_KEYWORDS};

/// Scores anchors against a fixed keyword table
///
/// The filter is read-only after construction and can be shared freely
/// between concurrent crawl branches.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
    threshold: f64,
}

impl RelevanceFilter {
    /// Creates a filter from keywords and a similarity threshold
    ///
    /// Keywords are lowercased; a link is relevant when its ratio against a
    /// keyword is strictly greater than `threshold`.
    pub fn new<I, S>(keywords: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            threshold,
        }
    }

    pub fn from_config(config: &RelevanceConfig) -> Self {
        Self::new(&config.keywords, config.similarity_threshold)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if the anchor looks like it leads to useful content
    ///
    /// Both `href` and `link_text` may be empty. Never fails: anything that
    /// cannot be matched is simply not relevant.
    pub fn is_relevant(&self, href: &str, link_text: &str) -> bool {
        let target = format!("{} {}", href, link_text).to_lowercase();

        self.keywords.iter().any(|keyword| {
            target.contains(keyword.as_str())
                || similarity_ratio(keyword, &target) > self.threshold
        })
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::from_config(&RelevanceConfig::default())
    }
}

/// Checks an anchor against the built-in keyword table and threshold
///
/// # Examples
///
/// ```
/// use campus_crawl::relevance::is_relevant;
///
/// assert!(is_relevant("admission-form.html", ""));
/// assert!(!is_relevant("xyz123.html", "random"));
/// ```
pub fn is_relevant(href: &str, link_text: &str) -> bool {
    RelevanceFilter::new(DEFAULT_KEYWORDS, RelevanceConfig::default().similarity_threshold)
        .is_relevant(href, link_text)
}
