// ABOUTME: Provider contract and the built-in metadata providers.
// ABOUTME: Each provider recognizes one markup pattern, extracts key/value pairs, and resolves fields.

//! Metadata providers.
//!
//! A provider is a stateless strategy that:
//! - recognizes markup nodes it understands,
//! - extracts a single `(key, value)` pair from such a node,
//! - picks the best value for a field out of the values it produced earlier.
//!
//! Providers are ordered by a numeric priority where lower is preferred.
//! Priorities may be fractional, which is how a provider is slotted in
//! between two existing ones (see [`JsonLdProvider`] at `0.5`).
//!
//! Submodules:
//! - `registry`: priority-ordered dispatch and field resolution.
//! - `loader`: builds registries from JSON provider manifests.

mod json_ld;
pub mod loader;
mod open_graph;
mod other_elements;
pub mod registry;
mod standard_meta;
mod twitter;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dom::MarkupNode;

pub use json_ld::JsonLdProvider;
pub use open_graph::OpenGraphProvider;
pub use other_elements::OtherElementsProvider;
pub use registry::{Dispatch, ProviderRegistry};
pub use standard_meta::StandardMetaProvider;
pub use twitter::TwitterProvider;

/// Field key -> observed values, in observation order.
pub type FieldValues = BTreeMap<String, Vec<String>>;

/// Provider name -> that provider's field values.
pub type ProviderData = BTreeMap<String, FieldValues>;

/// A metadata extraction strategy.
pub trait Provider: fmt::Debug + Send + Sync {
    /// Stable identifier, used as the accumulator namespace.
    fn name(&self) -> &str;

    /// Lower values are tried first.
    fn priority(&self) -> f64;

    /// Pure predicate over the node's tag and attributes.
    fn recognize(&self, node: &dyn MarkupNode) -> bool;

    /// Extracts a single key/value pair. Returns `None` for unrecognized nodes.
    fn extract(&self, node: &dyn MarkupNode) -> Option<(String, String)>;

    /// Picks this provider's value for `field`: the first one observed.
    fn resolve_field(&self, field: &str, values: &FieldValues) -> Option<String> {
        values.get(field).and_then(|v| v.first()).cloned()
    }
}

/// The built-in provider implementations, as named in provider manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    OpenGraph,
    Twitter,
    StandardMeta,
    OtherElements,
    JsonLd,
}

impl ProviderKind {
    /// The namespace name the provider registers under.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::OpenGraph => OpenGraphProvider::NAME,
            ProviderKind::Twitter => TwitterProvider::NAME,
            ProviderKind::StandardMeta => StandardMetaProvider::NAME,
            ProviderKind::OtherElements => OtherElementsProvider::NAME,
            ProviderKind::JsonLd => JsonLdProvider::NAME,
        }
    }

    /// The priority the provider uses unless overridden.
    pub fn default_priority(self) -> f64 {
        match self {
            ProviderKind::OpenGraph => OpenGraphProvider::PRIORITY,
            ProviderKind::Twitter => TwitterProvider::PRIORITY,
            ProviderKind::StandardMeta => StandardMetaProvider::PRIORITY,
            ProviderKind::OtherElements => OtherElementsProvider::PRIORITY,
            ProviderKind::JsonLd => JsonLdProvider::PRIORITY,
        }
    }

    /// Instantiates the provider, optionally overriding its priority.
    pub fn instantiate(self, priority: Option<f64>) -> Arc<dyn Provider> {
        let priority = priority.unwrap_or_else(|| self.default_priority());
        match self {
            ProviderKind::OpenGraph => Arc::new(OpenGraphProvider::with_priority(priority)),
            ProviderKind::Twitter => Arc::new(TwitterProvider::with_priority(priority)),
            ProviderKind::StandardMeta => Arc::new(StandardMetaProvider::with_priority(priority)),
            ProviderKind::OtherElements => {
                Arc::new(OtherElementsProvider::with_priority(priority))
            }
            ProviderKind::JsonLd => Arc::new(JsonLdProvider::with_priority(priority)),
        }
    }
}

/// The four standard providers at their standard priorities.
pub fn default_providers() -> Vec<Arc<dyn Provider>> {
    vec![
        Arc::new(OpenGraphProvider::new()),
        Arc::new(TwitterProvider::new()),
        Arc::new(StandardMetaProvider::new()),
        Arc::new(OtherElementsProvider::new()),
    ]
}

/// If `node` is a `meta` whose `property` or `name` starts with `prefix`,
/// returns that attribute value. `property` is checked first.
fn prefixed_meta_attr<'a>(node: &'a dyn MarkupNode, prefix: &str) -> Option<&'a str> {
    if !node.is_tag("meta") {
        return None;
    }
    ["property", "name"]
        .into_iter()
        .filter_map(|attr| node.attr(attr))
        .find(|value| value.starts_with(prefix))
}

/// Shared extraction for prefix-namespaced meta tags (`og:`, `twitter:`).
fn extract_prefixed_meta(node: &dyn MarkupNode, prefix: &str) -> Option<(String, String)> {
    let attr = prefixed_meta_attr(node, prefix)?;
    let key = &attr[prefix.len()..];
    if key.is_empty() {
        return None;
    }
    let content = node.attr("content")?;
    if content.trim().is_empty() {
        return None;
    }
    Some((key.to_string(), content.to_string()))
}
