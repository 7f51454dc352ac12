// ABOUTME: Multi-source metadata accumulator with priority-resolved convenience getters.
// ABOUTME: Stores every observed value per provider and field; resolves fields through the registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::feed::Feed;
use crate::providers::{
    FieldValues, JsonLdProvider, OpenGraphProvider, OtherElementsProvider, ProviderData,
    ProviderRegistry, StandardMetaProvider, TwitterProvider,
};

/// Favicon path assumed when no provider supplied an icon.
pub const DEFAULT_FAVICON: &str = "/favicon.ico";

static EMPTY_FIELDS: FieldValues = BTreeMap::new();

/// Everything observed while traversing one document.
#[derive(Debug, Clone)]
pub struct Metadata {
    registry: Arc<ProviderRegistry>,
    data: ProviderData,
    feeds: Vec<Feed>,
}

impl Metadata {
    /// Creates an empty accumulator with a namespace for every registered provider.
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        let data = registry
            .iter()
            .map(|p| (p.name().to_string(), FieldValues::new()))
            .collect();
        Self {
            registry,
            data,
            feeds: Vec::new(),
        }
    }

    /// Appends `value` to `provider`'s list for `key`. Never overwrites or deduplicates.
    pub fn add_data(
        &mut self,
        provider: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.data
            .entry(provider.into())
            .or_default()
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    pub fn push_feed(&mut self, feed: Feed) {
        self.feeds.push(feed);
    }

    /// Discovered feeds, in document order.
    pub fn feeds(&self) -> &[Feed] {
        &self.feeds
    }

    /// All accumulated values keyed by provider name.
    pub fn data(&self) -> &ProviderData {
        &self.data
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolves `field` across providers in priority order.
    pub fn resolve_field(&self, field: &str) -> Option<String> {
        self.registry.resolve_field(field, &self.data)
    }

    fn resolve_first(&self, fields: &[&str]) -> Option<String> {
        fields.iter().find_map(|f| self.resolve_field(f))
    }

    /// `icon`, then `shortcut icon`, then [`DEFAULT_FAVICON`].
    pub fn favicon(&self) -> String {
        self.resolve_first(&["icon", "shortcut icon"])
            .unwrap_or_else(|| DEFAULT_FAVICON.to_string())
    }

    /// `title`, then the first `<h1>`.
    pub fn title(&self) -> Option<String> {
        self.resolve_first(&["title", "firstHeading"])
    }

    pub fn description(&self) -> Option<String> {
        self.resolve_field("description")
    }

    pub fn image(&self) -> Option<String> {
        self.resolve_field("image")
    }

    /// Canonical URL.
    pub fn url(&self) -> Option<String> {
        self.resolve_field("url")
    }

    /// Open Graph's `site_name`, then Twitter's `site`.
    pub fn site_name(&self) -> Option<String> {
        self.resolve_first(&["site_name", "site"])
    }

    /// Raw values for one provider, empty if it never contributed.
    pub fn provider_data(&self, name: &str) -> &FieldValues {
        self.data.get(name).unwrap_or(&EMPTY_FIELDS)
    }

    pub fn open_graph(&self) -> &FieldValues {
        self.provider_data(OpenGraphProvider::NAME)
    }

    pub fn twitter(&self) -> &FieldValues {
        self.provider_data(TwitterProvider::NAME)
    }

    pub fn standard_meta(&self) -> &FieldValues {
        self.provider_data(StandardMetaProvider::NAME)
    }

    pub fn other_elements(&self) -> &FieldValues {
        self.provider_data(OtherElementsProvider::NAME)
    }

    pub fn json_ld(&self) -> &FieldValues {
        self.provider_data(JsonLdProvider::NAME)
    }

    /// Snapshot of the resolved fields, feeds and raw data.
    pub fn summary(&self) -> MetadataSummary {
        MetadataSummary {
            title: self.title(),
            description: self.description(),
            image: self.image(),
            url: self.url(),
            site_name: self.site_name(),
            favicon: self.favicon(),
            feeds: self.feeds.clone(),
            providers: self.data.clone(),
        }
    }
}

/// Serializable view of a [`Metadata`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataSummary {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub site_name: Option<String>,
    pub favicon: String,
    pub feeds: Vec<Feed>,
    pub providers: ProviderData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Metadata {
        Metadata::new(Arc::new(ProviderRegistry::standard()))
    }

    #[test]
    fn new_seeds_every_provider_namespace() {
        let meta = metadata();
        assert_eq!(meta.data().len(), 4);
        assert!(meta.open_graph().is_empty());
        assert!(meta.data().contains_key("other_elements"));
    }

    #[test]
    fn add_data_accumulates_in_call_order() {
        let mut meta = metadata();
        meta.add_data("twitter", "title", "a");
        meta.add_data("twitter", "title", "b");
        meta.add_data("twitter", "title", "a");
        assert_eq!(meta.twitter()["title"], vec!["a", "b", "a"]);
    }

    #[test]
    fn add_data_creates_unknown_namespaces() {
        let mut meta = metadata();
        meta.add_data("custom", "k", "v");
        assert_eq!(meta.provider_data("custom")["k"], vec!["v"]);
    }

    #[test]
    fn title_falls_through_providers() {
        let mut meta = metadata();
        meta.add_data("twitter", "title", "T1");
        meta.add_data("standard_meta", "title", "T2");
        assert_eq!(meta.title().as_deref(), Some("T1"));
    }

    #[test]
    fn title_falls_back_to_first_heading() {
        let mut meta = metadata();
        meta.add_data("other_elements", "firstHeading", "Heading");
        assert_eq!(meta.title().as_deref(), Some("Heading"));
    }

    #[test]
    fn empty_title_falls_back_to_first_heading() {
        let mut meta = metadata();
        meta.add_data("other_elements", "title", "");
        meta.add_data("other_elements", "firstHeading", "Heading");
        assert_eq!(meta.title().as_deref(), Some("Heading"));
    }

    #[test]
    fn favicon_defaults() {
        assert_eq!(metadata().favicon(), DEFAULT_FAVICON);
    }

    #[test]
    fn favicon_prefers_icon_over_shortcut() {
        let mut meta = metadata();
        meta.add_data("other_elements", "shortcut icon", "/s.ico");
        assert_eq!(meta.favicon(), "/s.ico");
        meta.add_data("other_elements", "icon", "/i.png");
        assert_eq!(meta.favicon(), "/i.png");
    }

    #[test]
    fn site_name_accepts_twitter_site() {
        let mut meta = metadata();
        meta.add_data("twitter", "site", "@example");
        assert_eq!(meta.site_name().as_deref(), Some("@example"));
        meta.add_data("open_graph", "site_name", "Example");
        assert_eq!(meta.site_name().as_deref(), Some("Example"));
    }

    #[test]
    fn missing_provider_yields_empty_map() {
        let meta = metadata();
        assert!(meta.json_ld().is_empty());
        assert!(meta.provider_data("nope").is_empty());
    }

    #[test]
    fn summary_serializes_resolved_fields() {
        let mut meta = metadata();
        meta.add_data("open_graph", "description", "Desc");
        meta.push_feed(Feed {
            title: None,
            feed_type: String::new(),
            href: "/rss".to_string(),
        });
        let json = serde_json::to_value(meta.summary()).unwrap();
        assert_eq!(json["description"], "Desc");
        assert_eq!(json["favicon"], "/favicon.ico");
        assert_eq!(json["feeds"][0]["href"], "/rss");
        assert!(json["title"].is_null());
    }
}
