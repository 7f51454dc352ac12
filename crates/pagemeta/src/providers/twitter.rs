// ABOUTME: Twitter Card provider for `twitter:`-prefixed meta tags.
// ABOUTME: Strips the `twitter:` prefix to form the field key; the value is the `content` attribute.

use super::{extract_prefixed_meta, prefixed_meta_attr, Provider};
use crate::dom::MarkupNode;

const PREFIX: &str = "twitter:";

/// Harvests `<meta name="twitter:*">` (or `property="twitter:*"`) tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwitterProvider {
    priority: f64,
}

impl TwitterProvider {
    pub const NAME: &'static str = "twitter";
    pub const PRIORITY: f64 = 2.0;

    pub fn new() -> Self {
        Self::with_priority(Self::PRIORITY)
    }

    pub fn with_priority(priority: f64) -> Self {
        Self { priority }
    }
}

impl Default for TwitterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for TwitterProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn recognize(&self, node: &dyn MarkupNode) -> bool {
        prefixed_meta_attr(node, PREFIX).is_some()
    }

    fn extract(&self, node: &dyn MarkupNode) -> Option<(String, String)> {
        extract_prefixed_meta(node, PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn strips_prefix_from_card() {
        let provider = TwitterProvider::new();
        let node = Element::new("meta")
            .with_attr("property", "twitter:card")
            .with_attr("content", "summary");
        assert!(provider.recognize(&node));
        assert_eq!(
            provider.extract(&node),
            Some(("card".to_string(), "summary".to_string()))
        );
    }

    #[test]
    fn site_uses_twitter_naming() {
        let provider = TwitterProvider::new();
        let node = Element::new("meta")
            .with_attr("name", "twitter:site")
            .with_attr("content", "@example");
        assert_eq!(
            provider.extract(&node),
            Some(("site".to_string(), "@example".to_string()))
        );
    }

    #[test]
    fn does_not_recognize_open_graph() {
        let provider = TwitterProvider::new();
        let node = Element::new("meta")
            .with_attr("property", "og:title")
            .with_attr("content", "x");
        assert!(!provider.recognize(&node));
    }
}
