// ABOUTME: Syndication feed records discovered from <link rel="alternate"> elements.
// ABOUTME: Feeds bypass the provider system entirely.

use serde::{Deserialize, Serialize};

use crate::dom::MarkupNode;

/// A discovered syndication link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: Option<String>,
    /// Declared MIME type, empty when undeclared.
    #[serde(rename = "type")]
    pub feed_type: String,
    pub href: String,
}

impl Feed {
    /// Builds a feed from an alternate link. Links without `href` are skipped.
    pub fn from_node(node: &dyn MarkupNode) -> Option<Self> {
        let href = node.attr("href")?;
        Some(Self {
            title: node.attr("title").map(str::to_string),
            feed_type: node.attr("type").unwrap_or_default().to_string(),
            href: href.to_string(),
        })
    }
}
