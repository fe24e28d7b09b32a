use landing_links::resolver::{
    AssetResolver, CategoryResolver, MarketplaceDataResolver, PathResolver, RequestResolver,
    TranslationResolver,
};
use landing_links::{
    Envelope, Error, LinkResolver, NormalizedData, RequestContext, StaticTranslations,
    Translator,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn object(value: Value) -> Envelope {
    value.as_object().cloned().unwrap_or_default()
}

/// Records every lookup so tests can check which key/locale was asked for.
#[derive(Default)]
struct RecordingTranslator {
    calls: Mutex<Vec<(String, String)>>,
}

impl Translator for RecordingTranslator {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((key.to_string(), locale.to_string()));
        }
        Some(format!("{locale}:{key}"))
    }
}

#[test]
fn test_present_ids_echo_identity() {
    let data = NormalizedData::new();
    let path = PathResolver::new(HashMap::from([("p".to_string(), "/p".to_string())]));
    let market = MarketplaceDataResolver::new(HashMap::from([("m".to_string(), json!(0))]));
    let category =
        CategoryResolver::new(HashMap::from([("c".to_string(), object(json!({"n": 1})))]));

    let cases: [(&dyn LinkResolver, &str, &str); 3] = [
        (&path, "path", "p"),
        (&market, "marketplace_data", "m"),
        (&category, "category", "c"),
    ];
    for (resolver, link_type, id) in cases {
        let envelope = resolver.call(link_type, id, &data).expect("present id");
        assert_eq!(envelope["id"], json!(id));
        assert_eq!(envelope["type"], json!(link_type));

        let err = resolver
            .call(link_type, "absent", &data)
            .expect_err("absent id");
        assert!(err.is_unknown_reference());
    }
}

#[test]
fn test_asset_src_branches() {
    let data = object(json!({"assets": [{"id": "a1", "src": "hero.png"}]}));

    let hosted = AssetResolver::new(Some("cdn.example.com".into()), Some("acme".into()))
        .expect("sitename set");
    assert_eq!(
        hosted.call("assets", "a1", &data).expect("a1")["src"],
        json!("cdn.example.com/acme/hero.png")
    );

    let local = AssetResolver::new(None, Some("acme".into())).expect("sitename set");
    assert_eq!(
        local.call("assets", "a1", &data).expect("a1")["src"],
        json!("landing_page/hero.png")
    );

    assert!(matches!(
        AssetResolver::new(Some("cdn.example.com".into()), Some("   ".into())),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_translation_uses_collaborator_key_and_locale() {
    let translator = Arc::new(RecordingTranslator::default());
    let resolver = TranslationResolver::new("en", translator.clone());

    let envelope = resolver
        .call("translation", "search_button", &NormalizedData::new())
        .expect("known id");
    assert_eq!(envelope["value"], json!("en:landing_page.hero.search"));

    let calls = translator.calls.lock().expect("lock").clone();
    assert_eq!(
        calls,
        vec![("landing_page.hero.search".to_string(), "en".to_string())]
    );

    let err = resolver
        .call("translation", "unknown_button", &NormalizedData::new())
        .expect_err("unknown id");
    assert!(err.is_unknown_reference());
}

#[test]
fn test_translation_with_static_table() {
    let translations = StaticTranslations::new().with("en", "landing_page.hero.signup", "Join");
    let resolver = TranslationResolver::new("en", Arc::new(translations));
    assert_eq!(
        Value::Object(
            resolver
                .call("translation", "signup_button", &NormalizedData::new())
                .expect("translated")
        ),
        json!({"id": "signup_button", "type": "translation", "value": "Join"})
    );
}

#[test]
fn test_category_merge() {
    let resolver = CategoryResolver::new(HashMap::from([(
        "c1".to_string(),
        object(json!({"label": "Cars"})),
    )]));
    assert_eq!(
        Value::Object(
            resolver
                .call("category", "c1", &NormalizedData::new())
                .expect("c1")
        ),
        json!({"label": "Cars", "id": "c1", "type": "category"})
    );
}

#[test]
fn test_request_value() {
    let resolver = RequestResolver::new(Arc::new(RequestContext::new("https://", "example.com")));
    let data = NormalizedData::new();
    assert_eq!(
        resolver
            .call("request", "host_with_port_and_protocol", &data)
            .expect("recognized")["value"],
        json!("https://example.com")
    );
    assert!(resolver
        .call("request", "path", &data)
        .expect_err("unrecognized")
        .is_unknown_reference());
}
