// ABOUTME: Priority-ordered provider registry with node dispatch and field resolution.
// ABOUTME: Keeps providers stably sorted by ascending priority across registrations.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{default_providers, JsonLdProvider, Provider, ProviderData};
use crate::dom::MarkupNode;

/// A successful dispatch: which provider matched and what it extracted.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub provider: Arc<dyn Provider>,
    pub key: String,
    pub value: String,
}

impl Dispatch {
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

/// Ordered collection of providers, lowest priority value first.
///
/// Providers with equal priority keep their registration order. The registry
/// does not deduplicate by name.
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers each provider in turn.
    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Provider>>,
    {
        let mut registry = Self::new();
        for provider in providers {
            registry.register(provider);
        }
        registry
    }

    /// The four standard providers.
    pub fn standard() -> Self {
        Self::from_providers(default_providers())
    }

    /// The standard providers plus the JSON-LD provider.
    pub fn with_json_ld() -> Self {
        let mut registry = Self::standard();
        registry.register_provider(JsonLdProvider::new());
        registry
    }

    /// Appends a provider and re-sorts by priority.
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        debug!(
            provider = provider.name(),
            priority = provider.priority(),
            "registering provider"
        );
        self.providers.push(provider);
        // `sort_by` is stable, so equal priorities keep registration order.
        self.providers
            .sort_by(|a, b| a.priority().total_cmp(&b.priority()));
    }

    /// Registers a concrete provider value.
    pub fn register_provider<P: Provider + 'static>(&mut self, provider: P) {
        self.register(Arc::new(provider));
    }

    /// An independent copy of the ordered provider list.
    pub fn list_providers(&self) -> Vec<Arc<dyn Provider>> {
        self.providers.clone()
    }

    /// Iterates providers in priority order without copying.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter()
    }

    /// Looks up a provider by exact name.
    pub fn find_provider(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name).cloned()
    }

    /// Returns the first provider, in priority order, that both recognizes
    /// `node` and extracts a value from it.
    ///
    /// A provider that recognizes the node but yields nothing does not stop
    /// the scan; lower-priority providers still get their turn.
    pub fn dispatch(&self, node: &dyn MarkupNode) -> Option<Dispatch> {
        for provider in &self.providers {
            if !provider.recognize(node) {
                continue;
            }
            match provider.extract(node) {
                Some((key, value)) => {
                    debug!(provider = provider.name(), key = %key, "dispatched node");
                    return Some(Dispatch {
                        provider: Arc::clone(provider),
                        key,
                        value,
                    });
                }
                None => {
                    trace!(
                        provider = provider.name(),
                        tag = node.tag_name(),
                        "recognized node but extracted nothing"
                    );
                }
            }
        }
        None
    }

    /// Asks each provider in priority order for its value of `field`.
    ///
    /// Providers with no entry in `data` are skipped, and an empty answer
    /// does not win: the next provider is asked instead.
    pub fn resolve_field(&self, field: &str, data: &ProviderData) -> Option<String> {
        self.providers.iter().find_map(|provider| {
            let values = data.get(provider.name())?;
            provider
                .resolve_field(field, values)
                .filter(|v| !v.is_empty())
        })
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
