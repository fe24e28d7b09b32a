//! Dispatch registry - routes link references to the resolver for their type.

use crate::core::link::{Envelope, LinkRef, NormalizedData};
use crate::listing::ListingStore;
use crate::request::RequestInfo;
use crate::resolver::{
    AssetResolver, CategoryResolver, LinkResolver, ListingResolver, MarketplaceDataResolver,
    PathResolver, RequestResolver, TranslationResolver,
};
use crate::translation::Translator;
use crate::{error::Error, ResolverOptions, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Link type names used by [`LinkResolverRegistry::from_options`].
pub mod link_types {
    pub const PATH: &str = "path";
    pub const MARKETPLACE_DATA: &str = "marketplace_data";
    pub const ASSETS: &str = "assets";
    pub const TRANSLATION: &str = "translation";
    pub const CATEGORY: &str = "category";
    pub const LISTING: &str = "listing";
    pub const REQUEST: &str = "request";
}

/// Maps link types to resolver instances.
#[derive(Default)]
pub struct LinkResolverRegistry {
    resolvers: HashMap<String, Box<dyn LinkResolver>>,
}

impl LinkResolverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard registry from configuration.
    ///
    /// The `request` type is registered only when `options.request` is set.
    /// Fails with [`Error::Configuration`] when `options.sitename` is blank.
    pub fn from_options(
        options: &ResolverOptions,
        translator: Arc<dyn Translator>,
        listing_store: Arc<dyn ListingStore>,
    ) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(link_types::PATH, PathResolver::new(options.paths.clone()));
        registry.register(
            link_types::MARKETPLACE_DATA,
            MarketplaceDataResolver::new(options.marketplace_data.clone()),
        );
        registry.register(
            link_types::ASSETS,
            AssetResolver::new(options.asset_host.clone(), options.sitename.clone())?,
        );
        registry.register(
            link_types::TRANSLATION,
            TranslationResolver::new(options.locale.clone(), translator),
        );
        registry.register(
            link_types::CATEGORY,
            CategoryResolver::new(options.category_data.clone()),
        );
        registry.register(
            link_types::LISTING,
            ListingResolver::new(
                options.community_id.clone(),
                options.locale.clone(),
                options.name_display_type,
                listing_store,
            ),
        );
        if let Some(request) = &options.request {
            let request: Arc<dyn RequestInfo> = Arc::new(request.clone());
            registry.register(link_types::REQUEST, RequestResolver::new(request));
        }

        Ok(registry)
    }

    /// Registers `resolver` for `link_type`, replacing any previous one.
    pub fn register<R>(&mut self, link_type: impl Into<String>, resolver: R)
    where
        R: LinkResolver + 'static,
    {
        self.resolvers.insert(link_type.into(), Box::new(resolver));
    }

    pub fn contains(&self, link_type: &str) -> bool {
        self.resolvers.contains_key(link_type)
    }

    /// Registered link types, sorted.
    pub fn link_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.resolvers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Resolves one link with the resolver registered for its type.
    pub fn resolve(&self, link: &LinkRef, data: &NormalizedData) -> Result<Envelope> {
        let Some(resolver) = self.resolvers.get(&link.link_type) else {
            tracing::warn!(link_type = %link.link_type, id = %link.id, "no resolver for link type");
            return Err(Error::UnknownLinkType(format!(
                "Unknown link type '{}'.",
                link.link_type
            )));
        };

        tracing::debug!(link_type = %link.link_type, id = %link.id, "resolving link");
        resolver.call(&link.link_type, &link.id, data)
    }

    /// Resolves every link in order, stopping at the first failure.
    pub fn resolve_all(&self, links: &[LinkRef], data: &NormalizedData) -> Result<Vec<Envelope>> {
        links.iter().map(|link| self.resolve(link, data)).collect()
    }
}
