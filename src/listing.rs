//! Listing store used by the listing resolver.

use crate::core::link::Envelope;
use crate::{error::Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// How author names are shown on listing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameDisplayType {
    FirstNameOnly,
    #[default]
    FirstNameWithInitial,
    FullName,
}

impl NameDisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameDisplayType::FirstNameOnly => "first_name_only",
            NameDisplayType::FirstNameWithInitial => "first_name_with_initial",
            NameDisplayType::FullName => "full_name",
        }
    }
}

/// Query passed to a [`ListingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery<'a> {
    pub id: &'a str,
    pub community_id: &'a str,
    pub locale: &'a str,
    pub name_display_type: NameDisplayType,
}

/// Source of listing records.
///
/// Implementations decide the record shape and their own failure modes; the
/// listing resolver returns both unchanged.
pub trait ListingStore: Send + Sync {
    fn listing(&self, query: &ListingQuery<'_>) -> Result<Envelope>;
}

/// In-memory listing store keyed by listing id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticListingStore {
    listings: HashMap<String, Envelope>,
}

impl StaticListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, record: Envelope) {
        self.listings.insert(id.into(), record);
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl ListingStore for StaticListingStore {
    fn listing(&self, query: &ListingQuery<'_>) -> Result<Envelope> {
        self.listings
            .get(query.id)
            .cloned()
            .ok_or_else(|| Error::ListingNotFound(query.id.to_string()))
    }
}
