//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with a browser-like user agent
//! - Enforcing the connection pool caps (total and per host)
//! - GET requests with a per-request timeout
//! - Folding every failure mode into "page unavailable"

use crate::config::HttpConfig;
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

/// Fetches raw page bodies
///
/// Implementations must not distinguish failure causes: any failure is
/// reported as `None` and the caller skips the page.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &Url) -> Option<String>;
}

#[async_trait]
impl<'a, T: Fetch + ?Sized> Fetch for &'a T {
    async fn fetch(&self, url: &Url) -> Option<String> {
        (**self).fetch(url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use campus_crawl::config::HttpConfig;
/// use campus_crawl::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.total_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_max_idle_per_host(config.max_connections_per_host as usize)
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed fetcher with total and per-host connection caps
///
/// reqwest only limits idle connections, so the active caps are enforced
/// here with semaphores held for the duration of each request.
pub struct HttpFetcher {
    client: Client,
    request_timeout: Duration,
    connections: Arc<Semaphore>,
    per_host: DashMap<String, Arc<Semaphore>>,
    per_host_limit: usize,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Wraps an existing client, taking only the limits from `config`
    pub fn with_client(client: Client, config: &HttpConfig) -> Self {
        Self {
            client,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            connections: Arc::new(Semaphore::new(config.max_connections.max(1) as usize)),
            per_host: DashMap::new(),
            per_host_limit: config.max_connections_per_host.max(1) as usize,
        }
    }

    fn host_semaphore(&self, url: &Url) -> Arc<Semaphore> {
        let key = format!(
            "{}:{}",
            url.host_str().unwrap_or_default(),
            url.port_or_known_default().unwrap_or_default()
        );
        self.per_host
            .entry(key)
            .or_insert_with(|| Arc::new(Semaphore::new(self.per_host_limit)))
            .clone()
    }

    async fn get(&self, url: &Url) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .client
            .get(url.clone())
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %url, status = status.as_u16(), "HTTP {} for {}", status.as_u16(), url);
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Option<String> {
        let host = self.host_semaphore(url);
        let _connection = self.connections.acquire().await.ok()?;
        let _host = host.acquire().await.ok()?;

        match self.get(url).await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                tracing::warn!(url = %url, "Timeout fetching {}", url);
                None
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Error fetching {}", url);
                None
            }
        }
    }
}
