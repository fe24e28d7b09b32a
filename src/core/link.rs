use serde_json::{Map, Value};

/// Resolved value envelope: a JSON object carrying at least `id` and `type`.
pub type Envelope = Map<String, Value>;

/// Per-call data keyed by link type, each entry an array of records.
pub type NormalizedData = Map<String, Value>;

/// A `(type, id)` pair naming the value a landing page wants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkRef {
    pub link_type: String,
    pub id: String,
}

impl LinkRef {
    pub fn new(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            link_type: link_type.into(),
            id: id.into(),
        }
    }

    /// Reads a link reference from an object holding exactly `type` and `id` strings.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.len() != 2 {
            return None;
        }
        let link_type = obj.get("type")?.as_str()?;
        let id = obj.get("id")?.as_str()?;
        Some(Self::new(link_type, id))
    }
}

/// Builds `{"id": id, "type": link_type, "value": value}`.
pub fn value_envelope(link_type: &str, id: &str, value: impl Into<Value>) -> Envelope {
    let mut envelope = Envelope::new();
    envelope.insert("id".to_string(), Value::from(id));
    envelope.insert("type".to_string(), Value::from(link_type));
    envelope.insert("value".to_string(), value.into());
    envelope
}

/// Overwrites `id` and `type` on an existing record.
pub fn with_identity(mut record: Envelope, link_type: &str, id: &str) -> Envelope {
    record.insert("id".to_string(), Value::from(id));
    record.insert("type".to_string(), Value::from(link_type));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_requires_exactly_type_and_id() {
        assert_eq!(
            LinkRef::from_json(&json!({"type": "path", "id": "search"})),
            Some(LinkRef::new("path", "search"))
        );
        assert_eq!(
            LinkRef::from_json(&json!({"type": "path", "id": "search", "extra": 1})),
            None
        );
        assert_eq!(LinkRef::from_json(&json!({"type": "path", "id": 3})), None);
        assert_eq!(LinkRef::from_json(&json!(["path", "search"])), None);
    }

    #[test]
    fn test_with_identity_overwrites() {
        let record = json!({"id": "old", "label": "Cars"})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let merged = with_identity(record, "category", "c1");
        assert_eq!(Value::Object(merged), json!({"id": "c1", "type": "category", "label": "Cars"}));
    }
}
