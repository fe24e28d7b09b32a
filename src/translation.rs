//! Translation lookup used by the translation resolver.

use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Looks up translated strings by key and locale.
pub trait Translator: Send + Sync {
    /// Returns the translation for `key` in `locale`, or `None` if there is none.
    fn translate(&self, key: &str, locale: &str) -> Option<String>;
}

/// In-memory translation table (locale -> key -> text).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticTranslations {
    locales: HashMap<String, HashMap<String, String>>,
}

impl StaticTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, replacing any previous text for the same key and locale.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Builder-style variant of [`StaticTranslations::insert`].
    pub fn with(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, text);
        self
    }

    /// Loads a table shaped like `{"en": {"landing_page.hero.search": "Search"}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Translator for StaticTranslations {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        self.locales.get(locale)?.get(key).cloned()
    }
}
