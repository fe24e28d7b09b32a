//! Category resolver.

use super::LinkResolver;
use crate::core::link::{with_identity, Envelope, NormalizedData};
use crate::{error::Error, Result};
use std::collections::HashMap;

pub struct CategoryResolver {
    data: HashMap<String, Envelope>,
}

impl CategoryResolver {
    pub fn new(data: HashMap<String, Envelope>) -> Self {
        Self { data }
    }
}

impl LinkResolver for CategoryResolver {
    fn call(&self, link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        let record = self
            .data
            .get(id)
            .ok_or_else(|| Error::UnknownReference(format!("Unknown category id '{id}'.")))?;

        Ok(with_identity(record.clone(), link_type, id))
    }
}
