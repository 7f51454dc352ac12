// ABOUTME: Main library entry point for the pagemeta metadata scraper.
// ABOUTME: Re-exports the public API: Scraper, ScraperBuilder, Metadata, providers, registry, and errors.

//! pagemeta - structured page metadata from HTML documents.
//!
//! Several providers (Open Graph, Twitter Card, plain meta tags, structural
//! elements, and optionally JSON-LD) each harvest values from the markup
//! patterns they understand. A priority-ordered registry decides which
//! provider handles a node and which provider's value wins for a field.
//!
//! # Example
//!
//! ```
//! use pagemeta::Scraper;
//!
//! let html = r#"
//!     <title>Fallback</title>
//!     <meta property="og:title" content="Preferred">
//! "#;
//! let metadata = Scraper::default().scrape_html(html);
//! assert_eq!(metadata.title().as_deref(), Some("Preferred"));
//! assert_eq!(metadata.favicon(), "/favicon.ico");
//! ```

pub mod dom;
pub mod error;
pub mod feed;
pub mod metadata;
pub mod options;
pub mod providers;
pub mod scrape;

pub use crate::dom::{Element, HtmlDocument, MarkupNode, QueryDocument};
pub use crate::error::{Result, ScrapeError};
pub use crate::feed::Feed;
pub use crate::metadata::{Metadata, MetadataSummary, DEFAULT_FAVICON};
pub use crate::options::{ScrapeOptions, ScraperBuilder};
pub use crate::providers::loader::{
    load_builtin_registry, load_registry_from_json, load_registry_from_path, ProviderSpec,
};
pub use crate::providers::{
    default_providers, Dispatch, FieldValues, JsonLdProvider, OpenGraphProvider,
    OtherElementsProvider, Provider, ProviderData, ProviderKind, ProviderRegistry,
    StandardMetaProvider, TwitterProvider,
};
pub use crate::scrape::{discover_feeds, Scraper};
