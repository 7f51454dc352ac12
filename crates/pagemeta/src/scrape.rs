// ABOUTME: Traversal driver that walks a document and accumulates provider output into Metadata.
// ABOUTME: Visits meta, title, h1, link[rel], and JSON-LD nodes, then discovers alternate feeds.

//! Document traversal.
//!
//! The scraper visits node sets in a fixed order:
//! 1. every `meta` element,
//! 2. the first `title`,
//! 3. the first `h1`,
//! 4. every `link` carrying `rel`,
//! 5. every JSON-LD `script` block,
//!
//! dispatching each through the registry. Feeds (`link[rel="alternate"]`)
//! are collected separately and never reach a provider.

use std::sync::Arc;

use tracing::debug;

use crate::dom::{HtmlDocument, MarkupNode, QueryDocument};
use crate::error::Result;
use crate::feed::Feed;
use crate::metadata::Metadata;
use crate::options::ScraperBuilder;
use crate::providers::ProviderRegistry;

const META_SELECTOR: &str = "meta";
const TITLE_SELECTOR: &str = "title";
const HEADING_SELECTOR: &str = "h1";
const LINK_SELECTOR: &str = "link[rel]";
const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const FEED_SELECTOR: &str = r#"link[rel="alternate"]"#;

/// Walks documents and accumulates metadata against a shared registry.
#[derive(Debug, Clone)]
pub struct Scraper {
    registry: Arc<ProviderRegistry>,
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(Arc::new(ProviderRegistry::standard()))
    }
}

impl Scraper {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Traverses `doc` and returns everything the providers extracted.
    pub fn scrape<D: QueryDocument>(&self, doc: &D) -> Metadata {
        let mut metadata = Metadata::new(Arc::clone(&self.registry));

        for node in doc.select_all(META_SELECTOR) {
            self.collect(&node, &mut metadata);
        }
        if let Some(node) = doc.select_first(TITLE_SELECTOR) {
            self.collect(&node, &mut metadata);
        }
        if let Some(node) = doc.select_first(HEADING_SELECTOR) {
            self.collect(&node, &mut metadata);
        }
        for node in doc.select_all(LINK_SELECTOR) {
            self.collect(&node, &mut metadata);
        }
        for node in doc.select_all(JSON_LD_SELECTOR) {
            self.collect(&node, &mut metadata);
        }

        for feed in discover_feeds(doc) {
            metadata.push_feed(feed);
        }

        debug!(
            providers = metadata.data().len(),
            feeds = metadata.feeds().len(),
            "scraped document"
        );
        metadata
    }

    /// Parses `html` and scrapes it.
    pub fn scrape_html(&self, html: &str) -> Metadata {
        self.scrape(&HtmlDocument::parse(html))
    }

    /// Scrapes raw bytes, which must be UTF-8 text.
    pub fn scrape_bytes(&self, bytes: &[u8]) -> Result<Metadata> {
        let doc = HtmlDocument::from_bytes(bytes)?;
        Ok(self.scrape(&doc))
    }

    fn collect(&self, node: &dyn MarkupNode, metadata: &mut Metadata) {
        if let Some(hit) = self.registry.dispatch(node) {
            metadata.add_data(hit.provider.name(), hit.key, hit.value);
        }
    }
}

/// Collects `link[rel="alternate"]` elements that carry an `href`.
pub fn discover_feeds<D: QueryDocument>(doc: &D) -> Vec<Feed> {
    let feeds: Vec<Feed> = doc
        .select_all(FEED_SELECTOR)
        .iter()
        .filter_map(|node| Feed::from_node(node))
        .collect();
    debug!(count = feeds.len(), "discovered feeds");
    feeds
}
