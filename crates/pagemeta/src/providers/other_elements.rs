// ABOUTME: Provider for structural elements: <title>, <h1>, and <link rel> icons.
// ABOUTME: Emits `title`, `firstHeading`, `icon`, and `shortcut icon` fields.

use super::Provider;
use crate::dom::MarkupNode;

/// Harvests values from non-meta elements.
///
/// Text from `<title>` and `<h1>` is trimmed; whitespace-only text yields an
/// empty string rather than a miss. An element with no text at all is a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtherElementsProvider {
    priority: f64,
}

impl OtherElementsProvider {
    pub const NAME: &'static str = "other_elements";
    pub const PRIORITY: f64 = 4.0;

    pub fn new() -> Self {
        Self::with_priority(Self::PRIORITY)
    }

    pub fn with_priority(priority: f64) -> Self {
        Self { priority }
    }
}

impl Default for OtherElementsProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn trimmed_text(node: &dyn MarkupNode) -> Option<String> {
    node.text().map(|t| t.trim().to_string())
}

/// Icon fields by exact `rel` value.
fn link_field(rel: &str) -> Option<&'static str> {
    match rel {
        "icon" => Some("icon"),
        "shortcut icon" => Some("shortcut icon"),
        _ => None,
    }
}

impl Provider for OtherElementsProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn recognize(&self, node: &dyn MarkupNode) -> bool {
        node.is_tag("title")
            || node.is_tag("h1")
            || (node.is_tag("link") && node.attr("rel").is_some())
    }

    fn extract(&self, node: &dyn MarkupNode) -> Option<(String, String)> {
        if node.is_tag("title") {
            return trimmed_text(node).map(|t| ("title".to_string(), t));
        }
        if node.is_tag("h1") {
            return trimmed_text(node).map(|t| ("firstHeading".to_string(), t));
        }
        if node.is_tag("link") {
            let field = link_field(node.attr("rel")?)?;
            let href = node.attr("href").filter(|h| !h.is_empty())?;
            return Some((field.to_string(), href.to_string()));
        }
        None
    }
}
