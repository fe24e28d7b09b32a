//! # landing-links
//!
//! Resolves `{"type": ..., "id": ...}` link references in landing-page content
//! into renderable values: paths, marketplace copy, translations, assets,
//! categories, listings and request-derived values.
//!
//! ## Example
//!
//! ```no_run
//! use landing_links::{
//!     Denormalizer, LinkResolverRegistry, ResolverOptions, StaticListingStore,
//!     StaticTranslations,
//! };
//! use std::sync::Arc;
//!
//! let options = ResolverOptions::from_file("landing_page.config.json").unwrap();
//! let registry = LinkResolverRegistry::from_options(
//!     &options,
//!     Arc::new(StaticTranslations::from_file("translations.json").unwrap()),
//!     Arc::new(StaticListingStore::new()),
//! )
//! .unwrap();
//!
//! let page: serde_json::Value =
//!     serde_json::from_str(&std::fs::read_to_string("page.json").unwrap()).unwrap();
//! let data = page.as_object().cloned().unwrap_or_default();
//! let resolved = Denormalizer::new(&registry).denormalize(&page, &data).unwrap();
//! println!("{}", resolved);
//! ```

pub mod core;
pub mod denormalize;
pub mod error;
pub mod listing;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod translation;

pub use crate::core::link::{Envelope, LinkRef, NormalizedData};
pub use denormalize::{collect_links, Denormalizer};
pub use error::{Error, Result};
pub use listing::{ListingQuery, ListingStore, NameDisplayType, StaticListingStore};
pub use registry::LinkResolverRegistry;
pub use request::{RequestContext, RequestInfo};
pub use resolver::LinkResolver;
pub use translation::{StaticTranslations, Translator};

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Context the standard resolvers are built from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Path link ids to literal paths.
    pub paths: HashMap<String, String>,
    /// Marketplace data link ids to values.
    pub marketplace_data: HashMap<String, Value>,
    /// Host assets are served from; local `landing_page/` paths when unset.
    pub asset_host: Option<String>,
    /// Marketplace site name, required for asset links.
    pub sitename: Option<String>,
    /// Locale for translations and listings.
    pub locale: String,
    /// Category link ids to category records.
    pub category_data: HashMap<String, Envelope>,
    /// Community the listing store is queried for.
    pub community_id: String,
    /// How author names appear in listing records.
    pub name_display_type: NameDisplayType,
    /// Current request, enabling `request` links.
    pub request: Option<RequestContext>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            paths: HashMap::new(),
            marketplace_data: HashMap::new(),
            asset_host: None,
            sitename: None,
            locale: "en".to_string(),
            category_data: HashMap::new(),
            community_id: String::new(),
            name_display_type: NameDisplayType::default(),
            request: None,
        }
    }
}

impl ResolverOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file; missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
