// ABOUTME: Open Graph provider for `og:`-prefixed meta tags.
// ABOUTME: Strips the `og:` prefix to form the field key; the value is the `content` attribute.

use super::{extract_prefixed_meta, prefixed_meta_attr, Provider};
use crate::dom::MarkupNode;

const PREFIX: &str = "og:";

/// Harvests `<meta property="og:*">` (or `name="og:*"`) tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenGraphProvider {
    priority: f64,
}

impl OpenGraphProvider {
    pub const NAME: &'static str = "open_graph";
    pub const PRIORITY: f64 = 1.0;

    pub fn new() -> Self {
        Self::with_priority(Self::PRIORITY)
    }

    pub fn with_priority(priority: f64) -> Self {
        Self { priority }
    }
}

impl Default for OpenGraphProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for OpenGraphProvider {
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
