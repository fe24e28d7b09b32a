//! Marketplace data resolver - marketplace-wide copy and settings.

use super::LinkResolver;
use crate::core::link::{value_envelope, Envelope, NormalizedData};
use crate::{error::Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Resolves marketplace data values.
///
/// Present keys resolve even when their value is empty, `false` or `null`;
/// only absent keys fail.
pub struct MarketplaceDataResolver {
    data: HashMap<String, Value>,
}

impl MarketplaceDataResolver {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }
}

impl LinkResolver for MarketplaceDataResolver {
    fn call(&self, link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        match self.data.get(id) {
            Some(value) => Ok(value_envelope(link_type, id, value.clone())),
            None => Err(Error::UnknownReference(format!(
                "Unknown marketplace data value '{id}'."
            ))),
        }
    }
}
