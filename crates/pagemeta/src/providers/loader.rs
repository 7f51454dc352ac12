// ABOUTME: Loader for provider registries from JSON provider manifests.
// ABOUTME: Provides load_builtin_registry() and manifest parsing with unknown-kind rejection.

//! Provider manifest loader.
//!
//! A manifest is a JSON array naming which built-in providers to
//! instantiate, optionally overriding their priority:
//!
//! ```json
//! [
//!   { "kind": "json_ld", "priority": 0.5 },
//!   { "kind": "open_graph" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ProviderKind, ProviderRegistry};
use crate::error::{Result, ScrapeError};

/// Embedded manifest listing the standard providers.
const BUILTIN_MANIFEST_JSON: &str = include_str!("../../data/providers.json");

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSpec {
    pub kind: ProviderKind,
    #[serde(default)]
    pub priority: Option<f64>,
}

/// Parses a manifest into its entries.
pub fn parse_manifest(json: &str) -> Result<Vec<ProviderSpec>> {
    serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "rejecting provider manifest");
        ScrapeError::manifest(e.to_string())
    })
}

/// Builds a registry from manifest entries, registering each in order.
pub fn registry_from_specs(specs: &[ProviderSpec]) -> ProviderRegistry {
    ProviderRegistry::from_providers(specs.iter().map(|s| s.kind.instantiate(s.priority)))
}

/// Parses a JSON manifest and builds its registry.
pub fn load_registry_from_json(json: &str) -> Result<ProviderRegistry> {
    let specs = parse_manifest(json)?;
    Ok(registry_from_specs(&specs))
}

/// Reads a JSON manifest from disk and builds its registry.
pub fn load_registry_from_path(path: impl AsRef<Path>) -> Result<ProviderRegistry> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| ScrapeError::io(path.display().to_string(), e))?;
    load_registry_from_json(&json)
}

/// Loads the registry described by the embedded default manifest.
pub fn load_builtin_registry() -> Result<ProviderRegistry> {
    load_registry_from_json(BUILTIN_MANIFEST_JSON)
}
