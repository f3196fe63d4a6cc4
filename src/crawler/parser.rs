//! HTML parser for extracting page content and anchors
//!
//! This module handles parsing HTML content to extract:
//! - The page title
//! - Paragraph and heading texts, filtered and capped
//! - Anchors (href plus visible text) for link discovery
//!
//! Text inside `<script>` and `<style>` elements is never part of any
//! extracted string.

use crate::config::ExtractionConfig;
use crate::output::PageRecord;
use scraper::{ElementRef, Html, Selector};

/// An `<a href>` found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The raw href attribute, not yet resolved
    pub href: String,

    /// Visible link text, whitespace-collapsed
    pub text: String,
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title, or the configured placeholder
    pub title: String,

    /// Paragraphs longer than the minimum length, in document order
    pub paragraphs: Vec<String>,

    /// Non-empty h1-h6 texts in document order
    pub headings: Vec<String>,

    /// All anchors with an href, in document order
    pub anchors: Vec<Anchor>,
}

impl ParsedPage {
    /// Returns true if at least one paragraph or heading survived filtering
    pub fn has_content(&self) -> bool {
        !self.paragraphs.is_empty() || !self.headings.is_empty()
    }

    /// Builds the page record, or None for a page without content
    pub fn to_record(&self, url: &str) -> Option<PageRecord> {
        if !self.has_content() {
            return None;
        }

        Some(PageRecord {
            url: url.to_string(),
            title: self.title.clone(),
            paragraphs: self.paragraphs.clone(),
            headings: self.headings.clone(),
        })
    }
}

/// Turns raw markup into a parsed page according to the extraction limits
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    config: ExtractionConfig,
}

impl PageExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Parses HTML content and extracts title, text and anchors
    ///
    /// Malformed markup never fails; the HTML5 parser recovers and the page
    /// simply yields whatever content it can.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_crawl::crawler::PageExtractor;
    ///
    /// let html = r#"<html><head><title>Fees</title></head>
    ///     <body><h1>Fee Structure</h1><a href="/apply">Apply now</a></body></html>"#;
    /// let page = PageExtractor::default().extract(html);
    /// assert_eq!(page.title, "Fees");
    /// assert_eq!(page.headings, vec!["Fee Structure"]);
    /// assert_eq!(page.anchors[0].href, "/apply");
    /// ```
    pub fn extract(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);

        ParsedPage {
            title: extract_title(&document).unwrap_or_else(|| self.config.untitled.clone()),
            paragraphs: self.extract_paragraphs(&document),
            headings: self.extract_headings(&document),
            anchors: extract_anchors(&document),
        }
    }

    fn extract_paragraphs(&self, document: &Html) -> Vec<String> {
        select_texts(document, "p")
            .into_iter()
            .filter(|text| text.chars().count() > self.config.paragraph_min_length)
            .take(self.config.max_paragraphs)
            .collect()
    }

    fn extract_headings(&self, document: &Html) -> Vec<String> {
        select_texts(document, "h1, h2, h3, h4, h5, h6")
            .into_iter()
            .filter(|text| !text.is_empty())
            .take(self.config.max_headings)
            .collect()
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(visible_text)
        .filter(|s| !s.is_empty())
}

/// Extracts `<a href>` anchors in document order
fn extract_anchors(document: &Html) -> Vec<Anchor> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| {
            element.value().attr("href").map(|href| Anchor {
                href: href.to_string(),
                text: collapse_whitespace(&visible_text(element)),
            })
        })
        .collect()
}

fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).map(visible_text).collect(),
        Err(_) => Vec::new(),
    }
}

/// Collects the trimmed text of an element, skipping script and style content
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in element.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if hidden {
            continue;
        }

        text.push_str(fragment);
    }

    text.trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
