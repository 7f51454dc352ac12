// ABOUTME: Structured-data provider reading schema.org JSON-LD script blocks.
// ABOUTME: Yields the first of headline/description/image.url for Article and WebPage objects.

use serde_json::Value;
use tracing::trace;

use super::Provider;
use crate::dom::MarkupNode;

const SCRIPT_TYPE: &str = "application/ld+json";
const ACCEPTED_TYPES: [&str; 2] = ["Article", "WebPage"];

/// Harvests `<script type="application/ld+json">` blocks.
///
/// Sits at priority 0.5, ahead of Open Graph. Malformed JSON is a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonLdProvider {
    priority: f64,
}

impl JsonLdProvider {
    pub const NAME: &'static str = "json_ld";
    pub const PRIORITY: f64 = 0.5;

    pub fn new() -> Self {
        Self::with_priority(Self::PRIORITY)
    }

    pub fn with_priority(priority: f64) -> Self {
        Self { priority }
    }
}

impl Default for JsonLdProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn first_field(obj: &serde_json::Map<String, Value>) -> Option<(String, String)> {
    let candidates = [
        ("title", obj.get("headline")),
        ("description", obj.get("description")),
        ("image", obj.get("image").and_then(|img| img.get("url"))),
    ];
    candidates.into_iter().find_map(|(field, value)| {
        value
            .and_then(Value::as_str)
            .map(|s| (field.to_string(), s.to_string()))
    })
}

impl Provider for JsonLdProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn recognize(&self, node: &dyn MarkupNode) -> bool {
        node.is_tag("script") && node.attr("type") == Some(SCRIPT_TYPE)
    }

    fn extract(&self, node: &dyn MarkupNode) -> Option<(String, String)> {
        if !self.recognize(node) {
            return None;
        }
        let text = node.text()?;
        let json: Value = match serde_json::from_str(text.trim()) {
            Ok(json) => json,
            Err(err) => {
                trace!(error = %err, "ignoring malformed JSON-LD");
                return None;
            }
        };
        let obj = json.as_object()?;
        let ty = obj.get("@type").and_then(Value::as_str)?;
        if !ACCEPTED_TYPES.contains(&ty) {
            return None;
        }
        first_field(obj)
    }
}
