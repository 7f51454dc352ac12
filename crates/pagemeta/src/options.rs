// ABOUTME: Configuration options for the scraper including ScrapeOptions and ScraperBuilder.
// ABOUTME: ScraperBuilder provides a fluent API for assembling the provider registry.

use std::sync::Arc;

use crate::providers::{JsonLdProvider, Provider, ProviderRegistry};
use crate::scrape::Scraper;

/// Configuration options for a [`Scraper`].
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    /// Add the JSON-LD provider if the registry lacks one.
    pub include_json_ld: bool,
    /// Base registry; the standard providers when `None`.
    pub registry: Option<ProviderRegistry>,
    /// Extra providers registered on top of the base registry.
    pub extra_providers: Vec<Arc<dyn Provider>>,
}

/// Builder for constructing Scraper instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ScraperBuilder {
    opts: ScrapeOptions,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the JSON-LD provider.
    pub fn include_json_ld(mut self, include: bool) -> Self {
        self.opts.include_json_ld = include;
        self
    }

    /// Replace the base provider registry.
    pub fn registry(mut self, registry: ProviderRegistry) -> Self {
        self.opts.registry = Some(registry);
        self
    }

    /// Register an additional provider.
    pub fn provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.opts.extra_providers.push(provider);
        self
    }

    /// Assemble the registry. It is read-only from here on.
    pub fn build(self) -> Scraper {
        let ScrapeOptions {
            include_json_ld,
            registry,
            extra_providers,
        } = self.opts;

        let mut registry = registry.unwrap_or_else(ProviderRegistry::standard);
        for provider in extra_providers {
            registry.register(provider);
        }
        if include_json_ld && registry.find_provider(JsonLdProvider::NAME).is_none() {
            registry.register_provider(JsonLdProvider::new());
        }
        Scraper::new(Arc::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{OtherElementsProvider, TwitterProvider};

    fn names(scraper: &Scraper) -> Vec<String> {
        scraper
            .registry()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn default_build_uses_standard_providers() {
        let scraper = ScraperBuilder::new().build();
        assert_eq!(
            names(&scraper),
            vec!["open_graph", "twitter", "standard_meta", "other_elements"]
        );
    }

    #[test]
    fn json_ld_goes_first() {
        let scraper = ScraperBuilder::new().include_json_ld(true).build();
        assert_eq!(names(&scraper)[0], "json_ld");
        assert_eq!(scraper.registry().len(), 5);
    }

    #[test]
    fn json_ld_is_not_added_twice() {
        let scraper = ScraperBuilder::new()
            .registry(ProviderRegistry::with_json_ld())
            .include_json_ld(true)
            .build();
        assert_eq!(scraper.registry().len(), 5);
    }

    #[test]
    fn custom_registry_and_extra_provider() {
        let mut registry = ProviderRegistry::new();
        registry.register_provider(OtherElementsProvider::new());
        let scraper = ScraperBuilder::new()
            .registry(registry)
            .provider(Arc::new(TwitterProvider::with_priority(9.0)))
            .build();
        assert_eq!(names(&scraper), vec!["other_elements", "twitter"]);
    }
}
