//! Denormalizer - replaces link references inside a landing-page document.

use crate::core::link::{LinkRef, NormalizedData};
use crate::registry::LinkResolverRegistry;
use crate::Result;
use serde_json::{Map, Value};

/// Walks a landing-page document and swaps every link reference for its
/// resolved envelope.
///
/// A link reference is an object with exactly the string keys `type` and `id`.
pub struct Denormalizer<'a> {
    registry: &'a LinkResolverRegistry,
}

impl<'a> Denormalizer<'a> {
    pub fn new(registry: &'a LinkResolverRegistry) -> Self {
        Self { registry }
    }

    /// Returns a copy of `document` with all link references resolved.
    pub fn denormalize(&self, document: &Value, data: &NormalizedData) -> Result<Value> {
        if let Some(link) = LinkRef::from_json(document) {
            return Ok(Value::Object(self.registry.resolve(&link, data)?));
        }

        match document {
            Value::Object(obj) => {
                let mut out = Map::with_capacity(obj.len());
                for (key, value) in obj {
                    out.insert(key.clone(), self.denormalize(value, data)?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.denormalize(item, data))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }
}

/// Lists the link references in `document`, in document order.
pub fn collect_links(document: &Value) -> Vec<LinkRef> {
    let mut links = Vec::new();
    collect_into(document, &mut links);
    links
}

fn collect_into(value: &Value, links: &mut Vec<LinkRef>) {
    if let Some(link) = LinkRef::from_json(value) {
        links.push(link);
        return;
    }
    match value {
        Value::Object(obj) => obj.values().for_each(|v| collect_into(v, links)),
        Value::Array(items) => items.iter().for_each(|v| collect_into(v, links)),
        _ => {}
    }
}
