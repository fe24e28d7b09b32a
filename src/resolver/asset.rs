//! Asset resolver - finds asset records and rewrites their `src` to a served path.

use super::LinkResolver;
use crate::core::link::{Envelope, NormalizedData};
use crate::{error::Error, Result};
use serde_json::Value;

/// Local directory assets are served from when no asset host is configured.
const LOCAL_ASSET_DIR: &str = "landing_page";

pub struct AssetResolver {
    asset_host: Option<String>,
    sitename: String,
}

impl AssetResolver {
    /// Creates an asset resolver.
    ///
    /// Fails with [`Error::Configuration`] when `sitename` is missing or blank.
    /// A blank `asset_host` counts as not configured.
    pub fn new(asset_host: Option<String>, sitename: Option<String>) -> Result<Self> {
        let sitename = sitename
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| Error::Configuration("Missing sitename.".to_string()))?;
        let asset_host = asset_host.filter(|host| !host.trim().is_empty());

        Ok(Self {
            asset_host,
            sitename,
        })
    }

    fn served_src(&self, src: &str) -> String {
        match &self.asset_host {
            Some(host) => [host.as_str(), self.sitename.as_str(), src].join("/"),
            None => [LOCAL_ASSET_DIR, src].join("/"),
        }
    }
}

impl LinkResolver for AssetResolver {
    fn call(&self, link_type: &str, id: &str, data: &NormalizedData) -> Result<Envelope> {
        let asset = data
            .get(link_type)
            .and_then(Value::as_array)
            .and_then(|assets| {
                assets
                    .iter()
                    .filter_map(Value::as_object)
                    .find(|asset| asset.get("id").and_then(Value::as_str) == Some(id))
            })
            .ok_or_else(|| {
                Error::UnknownReference(format!("Unable to find an asset with id '{id}'."))
            })?;

        let src = asset.get("src").and_then(Value::as_str).unwrap_or_default();
        let mut resolved = asset.clone();
        resolved.insert("src".to_string(), Value::from(self.served_src(src)));
        Ok(resolved)
    }
}
