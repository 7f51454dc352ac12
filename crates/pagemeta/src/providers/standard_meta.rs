// ABOUTME: Provider for plain `<meta name|property content>` tags outside the og/twitter namespaces.
// ABOUTME: The field key is the `name` attribute, falling back to `property`.

use super::Provider;
use crate::dom::MarkupNode;

const RESERVED_PREFIXES: [&str; 2] = ["og:", "twitter:"];

/// Harvests generic meta tags such as `description`, `keywords` or `author`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMetaProvider {
    priority: f64,
}

impl StandardMetaProvider {
    pub const NAME: &'static str = "standard_meta";
    pub const PRIORITY: f64 = 3.0;

    pub fn new() -> Self {
        Self::with_priority(Self::PRIORITY)
    }

    pub fn with_priority(priority: f64) -> Self {
        Self { priority }
    }
}

impl Default for StandardMetaProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn is_reserved(value: Option<&str>) -> bool {
    value.is_some_and(|v| RESERVED_PREFIXES.iter().any(|p| v.starts_with(p)))
}

/// `name` wins over `property` whenever it is present, even if empty.
fn field_key(node: &dyn MarkupNode) -> Option<&str> {
    node.attr("name").or_else(|| node.attr("property"))
}

impl Provider for StandardMetaProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn recognize(&self, node: &dyn MarkupNode) -> bool {
        if !node.is_tag("meta") {
            return false;
        }
        let has_content = node.attr("content").is_some_and(|c| !c.is_empty());
        has_content
            && field_key(node).is_some()
            && !is_reserved(node.attr("name"))
            && !is_reserved(node.attr("property"))
    }

    fn extract(&self, node: &dyn MarkupNode) -> Option<(String, String)> {
        if !self.recognize(node) {
            return None;
        }
        let key = field_key(node)?;
        let content = node.attr("content")?;
        if content.trim().is_empty() {
            return None;
        }
        Some((key.to_string(), content.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn extracts_description() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("name", "description")
            .with_attr("content", "A page");
        assert_eq!(
            provider.extract(&node),
            Some(("description".to_string(), "A page".to_string()))
        );
    }

    #[test]
    fn name_wins_over_property() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("property", "title")
            .with_attr("name", "author")
            .with_attr("content", "Jo");
        assert_eq!(provider.extract(&node).map(|(k, _)| k).as_deref(), Some("author"));
    }

    #[test]
    fn falls_back_to_property() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("property", "article:published_time")
            .with_attr("content", "2024-01-01");
        assert_eq!(
            provider.extract(&node).map(|(k, _)| k).as_deref(),
            Some("article:published_time")
        );
    }

    #[test]
    fn present_empty_name_is_the_key() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("name", "")
            .with_attr("property", "x")
            .with_attr("content", "v");
        assert!(provider.recognize(&node));
        assert_eq!(
            provider.extract(&node),
            Some((String::new(), "v".to_string()))
        );
    }

    #[test]
    fn content_is_emitted_untrimmed() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("name", "author")
            .with_attr("content", " Jo Smith ");
        assert_eq!(
            provider.extract(&node),
            Some(("author".to_string(), " Jo Smith ".to_string()))
        );
    }

    #[test]
    fn skips_reserved_namespaces() {
        let provider = StandardMetaProvider::new();
        let og_name = Element::new("meta")
            .with_attr("name", "description")
            .with_attr("property", "og:description")
            .with_attr("content", "x");
        let twitter = Element::new("meta")
            .with_attr("name", "twitter:card")
            .with_attr("content", "summary");
        assert!(!provider.recognize(&og_name));
        assert!(!provider.recognize(&twitter));
        assert_eq!(provider.extract(&twitter), None);
    }

    #[test]
    fn requires_content_and_key() {
        let provider = StandardMetaProvider::new();
        let empty = Element::new("meta")
            .with_attr("name", "description")
            .with_attr("content", "");
        let charset = Element::new("meta").with_attr("charset", "utf-8");
        let keyless = Element::new("meta").with_attr("content", "x");
        assert!(!provider.recognize(&empty));
        assert!(!provider.recognize(&charset));
        assert!(!provider.recognize(&keyless));
    }

    #[test]
    fn whitespace_content_recognized_but_not_extracted() {
        let provider = StandardMetaProvider::new();
        let node = Element::new("meta")
            .with_attr("name", "keywords")
            .with_attr("content", "   ");
        assert!(provider.recognize(&node));
        assert_eq!(provider.extract(&node), None);
    }
}
