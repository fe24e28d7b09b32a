//! Translation resolver - localized UI strings.

use super::LinkResolver;
use crate::core::link::{value_envelope, Envelope, NormalizedData};
use crate::translation::Translator;
use crate::{error::Error, Result};
use std::sync::Arc;

/// Link ids recognized by [`TranslationResolver`] and their translation keys.
pub const TRANSLATION_KEYS: [(&str, &str); 3] = [
    ("search_button", "landing_page.hero.search"),
    ("signup_button", "landing_page.hero.signup"),
    ("no_listing_image", "landing_page.listings.no_listing_image"),
];

pub struct TranslationResolver {
    locale: String,
    translator: Arc<dyn Translator>,
}

impl TranslationResolver {
    pub fn new(locale: impl Into<String>, translator: Arc<dyn Translator>) -> Self {
        Self {
            locale: locale.into(),
            translator,
        }
    }

    fn translation_key(id: &str) -> Option<&'static str> {
        TRANSLATION_KEYS
            .iter()
            .find(|(link_id, _)| *link_id == id)
            .map(|(_, key)| *key)
    }
}

impl LinkResolver for TranslationResolver {
    fn call(&self, link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        let key = Self::translation_key(id).ok_or_else(|| {
            Error::UnknownReference(format!("Couldn't find translation key for '{id}'."))
        })?;

        let value = self.translator.translate(key, &self.locale).ok_or_else(|| {
            Error::UnknownReference(format!(
                "Unknown translation for key '{key}' and locale '{}'.",
                self.locale
            ))
        })?;

        Ok(value_envelope(link_type, id, value))
    }
}
