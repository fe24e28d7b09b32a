//! Path resolver - maps link ids to literal paths.

use super::LinkResolver;
use crate::core::link::{value_envelope, Envelope, NormalizedData};
use crate::{error::Error, Result};
use std::collections::HashMap;

pub struct PathResolver {
    paths: HashMap<String, String>,
}

impl PathResolver {
    pub fn new(paths: HashMap<String, String>) -> Self {
        Self { paths }
    }
}

impl LinkResolver for PathResolver {
    fn call(&self, link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        let path = self
            .paths
            .get(id)
            .ok_or_else(|| Error::UnknownReference(format!("Couldn't find path '{id}'.")))?;

        Ok(value_envelope(link_type, id, path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn resolver() -> PathResolver {
        PathResolver::new(HashMap::from([
            ("search".to_string(), "/search".to_string()),
            ("root".to_string(), String::new()),
        ]))
    }

    #[test]
    fn test_known_path() {
        let envelope = resolver()
            .call("path", "search", &NormalizedData::new())
            .expect("path should resolve");
        assert_eq!(
            Value::Object(envelope),
            json!({"id": "search", "type": "path", "value": "/search"})
        );
    }

    #[test]
    fn test_empty_path_is_still_present() {
        let envelope = resolver()
            .call("path", "root", &NormalizedData::new())
            .expect("empty path is a value");
        assert_eq!(envelope["value"], json!(""));
    }

    #[test]
    fn test_unknown_path() {
        let err = resolver()
            .call("path", "about", &NormalizedData::new())
            .expect_err("unknown id");
        assert!(err.is_unknown_reference());
        assert_eq!(err.to_string(), "Couldn't find path 'about'.");
    }
}
