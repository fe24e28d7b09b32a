//! Listing resolver - delegates to the listing store.

use super::LinkResolver;
use crate::core::link::{Envelope, NormalizedData};
use crate::listing::{ListingQuery, ListingStore, NameDisplayType};
use crate::Result;
use std::sync::Arc;

pub struct ListingResolver {
    community_id: String,
    locale: String,
    name_display_type: NameDisplayType,
    store: Arc<dyn ListingStore>,
}

impl ListingResolver {
    pub fn new(
        community_id: impl Into<String>,
        locale: impl Into<String>,
        name_display_type: NameDisplayType,
        store: Arc<dyn ListingStore>,
    ) -> Self {
        Self {
            community_id: community_id.into(),
            locale: locale.into(),
            name_display_type,
            store,
        }
    }
}

impl LinkResolver for ListingResolver {
    // Store output and store errors pass through as-is.
    fn call(&self, _link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        self.store.listing(&ListingQuery {
            id,
            community_id: &self.community_id,
            locale: &self.locale,
            name_display_type: self.name_display_type,
        })
    }
}
