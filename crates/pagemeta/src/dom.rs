// ABOUTME: Read-only DOM adapter consumed by providers and the traversal driver.
// ABOUTME: Defines MarkupNode/QueryDocument traits, a scraper-backed HtmlDocument, and an owned Element.

//! DOM adapter.
//!
//! Providers only ever read a node's tag name, attributes and text content,
//! and the traversal driver only ever needs "select all" and "select first".
//! Both capabilities are expressed as traits so that any DOM can be plugged
//! in; `HtmlDocument` is the default implementation on top of `scraper`.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// A single markup element as seen by providers.
pub trait MarkupNode {
    /// The element's tag name. Compare with [`MarkupNode::is_tag`].
    fn tag_name(&self) -> &str;

    /// Looks up an attribute. `Some("")` is distinct from `None`.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text content, or `None` if the element has no text at all.
    fn text(&self) -> Option<String>;

    /// Case-insensitive tag name comparison.
    fn is_tag(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }
}

/// A document that can be queried with simple CSS selectors.
pub trait QueryDocument {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// All elements matching `css`, in document order.
    fn select_all(&self, css: &str) -> Vec<Self::Node<'_>>;

    /// The first element matching `css`.
    fn select_first(&self, css: &str) -> Option<Self::Node<'_>> {
        self.select_all(css).into_iter().next()
    }
}

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result (invalid selectors cache as `None`).
fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// An HTML document parsed with `scraper`.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parses raw bytes, which must be UTF-8 encoded text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(ScrapeError::invalid_document)?;
        Ok(Self::parse(text))
    }

    /// Borrow the underlying `scraper` tree.
    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl From<Html> for HtmlDocument {
    fn from(html: Html) -> Self {
        Self { html }
    }
}

impl QueryDocument for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        match get_or_compile(css) {
            Some(sel) => self.html.select(&sel).collect(),
            None => vec![], // Invalid selector
        }
    }

    fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let sel = get_or_compile(css)?;
        self.html.select(&sel).next()
    }
}

impl MarkupNode for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> Option<String> {
        let mut parts = ElementRef::text(self).peekable();
        parts.peek()?;
        Some(parts.collect())
    }
}

/// An owned element, handy when no DOM is at hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets an attribute, replacing any earlier value with the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl MarkupNode for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>  Spaced Title  </title>
            <meta name="description" content="">
            <link rel="icon" href="/icon.png">
        </head>
        <body><h1></h1><h1>Second</h1></body>
        </html>
    "#;

    #[test]
    fn select_all_returns_document_order() {
        let doc = HtmlDocument::parse(SAMPLE_HTML);
        let headings = doc.select_all("h1");
        assert_eq!(headings.len(), 2);
        assert_eq!(MarkupNode::text(&headings[1]).as_deref(), Some("Second"));
    }

    #[test]
    fn empty_element_has_no_text() {
        let doc = HtmlDocument::parse(SAMPLE_HTML);
        let first = doc.select_first("h1").unwrap();
        assert_eq!(MarkupNode::text(&first), None);
    }

    #[test]
    fn title_text_is_untrimmed() {
        let doc = HtmlDocument::parse(SAMPLE_HTML);
        let title = doc.select_first("title").unwrap();
        assert_eq!(MarkupNode::text(&title).as_deref(), Some("  Spaced Title  "));
    }

    #[test]
    fn present_empty_attribute_differs_from_absent() {
        let doc = HtmlDocument::parse(SAMPLE_HTML);
        let meta = doc.select_first("meta").unwrap();
        assert_eq!(MarkupNode::attr(&meta, "content"), Some(""));
        assert_eq!(MarkupNode::attr(&meta, "property"), None);
    }

    #[test]
    fn invalid_selector_yields_nothing() {
        let doc = HtmlDocument::parse(SAMPLE_HTML);
        assert!(doc.select_all("[[[invalid").is_empty());
        assert!(doc.select_first("[[[invalid").is_none());
    }

    #[test]
    fn from_bytes_rejects_non_utf8() {
        let err = HtmlDocument::from_bytes(&[0xff, 0xfe, 0x3c]).unwrap_err();
        assert!(err.is_invalid_document());
    }

    #[test]
    fn owned_element_tag_is_case_insensitive() {
        let el = Element::new("META").with_attr("name", "a").with_attr("name", "b");
        assert!(el.is_tag("meta"));
        assert_eq!(el.attr("name"), Some("b"));
        assert_eq!(el.text(), None);
    }
}
