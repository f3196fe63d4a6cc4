//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! reqwest-backed fetcher through full crawl runs.

use campus_crawl::config::{Config, DEFAULT_USER_AGENT};
use campus_crawl::crawler::{crawl_site, crawl_with_stats};
use campus_crawl::CrawlError;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARAGRAPH: &str = "Applications for the next academic year open in January.";

/// Builds a page with one heading, one long paragraph and the given anchors
fn page(title: &str, links: &[(&str, &str)]) -> String {
    let anchors: String = links
        .iter()
        .map(|(href, text)| format!(r#"<a href="{}">{}</a>"#, href, text))
        .collect();
    format!(
        r#"<html><head><title>{}</title><script>var tracking = "ignored";</script></head>
        <body><h1>{}</h1><p>{}</p><p>Too short</p><nav>{}</nav></body></html>"#,
        title, title, PARAGRAPH, anchors
    )
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_response(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn test_config(max_depth: u32, max_pages: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.crawler.max_pages = max_pages;
    config.http.request_timeout_secs = 2;
    config.http.connect_timeout_secs = 2;
    config
}

#[tokio::test]
async fn test_relevant_internal_links_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Home",
            &[
                ("/admission", "Admissions"),
                ("/gallery", "Photos"),
                ("/fee-structure", "Fees"),
            ],
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/admission", page("Admission", &[]), 1).await;
    mount_page(&mock_server, "/fee-structure", page("Fees", &[]), 1).await;
    mount_page(&mock_server, "/gallery", page("Gallery", &[]), 0).await;

    let pages = crawl_site(&format!("{}/", base_url), &test_config(1, 10))
        .await
        .expect("Crawl failed");

    let urls: Vec<_> = pages.iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base_url),
            format!("{}/admission", base_url),
            format!("{}/fee-structure", base_url),
        ]
    );

    let home = &pages[0];
    assert_eq!(home.title, "Home");
    assert_eq!(home.headings, vec!["Home"]);
    assert_eq!(home.paragraphs, vec![PARAGRAPH]);
}

#[tokio::test]
async fn test_failed_pages_are_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Home",
            &[
                ("/course-missing", "Courses"),
                ("/faculty-slow", "Faculty"),
                ("/contact", "Contact"),
            ],
        ),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/course-missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/faculty-slow"))
        .respond_with(html_response(page("Faculty", &[])).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/contact", page("Contact", &[]), 1).await;

    let mut config = test_config(1, 10);
    config.http.request_timeout_secs = 1;

    let outcome = crawl_with_stats(&format!("{}/", base_url), &config)
        .await
        .expect("Crawl failed");

    let urls: Vec<_> = outcome.pages.iter().map(|p| p.url.clone()).collect();
    assert_eq!(
        urls,
        vec![format!("{}/", base_url), format!("{}/contact", base_url)]
    );
    assert_eq!(outcome.stats.scheduled, 4);
    assert_eq!(outcome.stats.failed, 2);
}

#[tokio::test]
async fn test_non_200_success_status_is_unavailable() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page("Home", &[("/program", "Programs")]),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/program"))
        .respond_with(ResponseTemplate::new(203).set_body_string(page("Programs", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pages = crawl_site(&format!("{}/", base_url), &test_config(1, 10))
        .await
        .expect("Crawl failed");

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn test_query_variants_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Home",
            &[
                ("/fees?year=2024", "Fees 2024"),
                ("/fees?year=2025#hostel", "Fees 2025"),
                ("/fees", "Fees"),
            ],
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/fees", page("Fees", &[("/", "Home FAQ")]), 1).await;

    let pages = crawl_site(&format!("{}/?utm_source=mail", base_url), &test_config(2, 10))
        .await
        .expect("Crawl failed");

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].url, format!("{}/fees", base_url));
}

#[tokio::test]
async fn test_page_budget_limits_fetches() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: Vec<(String, String)> = (0..5)
        .map(|i| (format!("/course{}", i), format!("Course {}", i)))
        .collect();
    let refs: Vec<(&str, &str)> = links
        .iter()
        .map(|(h, t)| (h.as_str(), t.as_str()))
        .collect();

    mount_page(&mock_server, "/", page("Home", &refs), 1).await;
    for i in 0..5 {
        let route = format!("/course{}", i);
        Mock::given(method("GET"))
            .and(path(route.as_str()))
            .respond_with(html_response(page("Course", &[])))
            .mount(&mock_server)
            .await;
    }

    let outcome = crawl_with_stats(&format!("{}/", base_url), &test_config(2, 3))
        .await
        .expect("Crawl failed");

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 3);
    assert_eq!(outcome.stats.scheduled, 3);
    assert_eq!(outcome.pages.len(), 3);
}

#[tokio::test]
async fn test_browser_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(html_response(page("Home", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pages = crawl_site(&format!("{}/", mock_server.uri()), &test_config(0, 1))
        .await
        .expect("Crawl failed");

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn test_unreachable_seed_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = crawl_site(&format!("{}/", mock_server.uri()), &test_config(2, 10)).await;

    assert!(matches!(result, Err(CrawlError::SeedUnreachable { .. })));
}

#[tokio::test]
async fn test_seed_without_content_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<html><body><p>Short</p><a href="/admission">Admission</a></body></html>"#
                .to_string(),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/admission", page("Admission", &[]), 0).await;

    let pages = crawl_site(&format!("{}/", mock_server.uri()), &test_config(2, 10))
        .await
        .expect("Crawl failed");

    assert!(pages.is_empty());
}

#[tokio::test]
async fn test_invalid_seed_is_error() {
    let result = crawl_site("not a url", &Config::default()).await;
    assert!(matches!(result, Err(CrawlError::InvalidSeed { .. })));

    let result = crawl_site("ftp://college.edu/", &Config::default()).await;
    assert!(matches!(result, Err(CrawlError::InvalidSeed { .. })));
}
