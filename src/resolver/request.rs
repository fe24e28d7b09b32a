//! Request resolver - values derived from the current HTTP request.

use super::LinkResolver;
use crate::core::link::{value_envelope, Envelope, NormalizedData};
use crate::request::RequestInfo;
use crate::{error::Error, Result};
use std::str::FromStr;
use std::sync::Arc;

/// Request-derived values a link can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestValue {
    /// `protocol` followed by `host_with_port`, e.g. `https://example.com`.
    HostWithPortAndProtocol,
}

impl FromStr for RequestValue {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        match id {
            "host_with_port_and_protocol" => Ok(RequestValue::HostWithPortAndProtocol),
            _ => Err(Error::UnknownReference(format!("Unknown request id '{id}'."))),
        }
    }
}

pub struct RequestResolver {
    request: Arc<dyn RequestInfo>,
}

impl RequestResolver {
    pub fn new(request: Arc<dyn RequestInfo>) -> Self {
        Self { request }
    }

    fn value_of(&self, value: RequestValue) -> String {
        match value {
            RequestValue::HostWithPortAndProtocol => format!(
                "{}{}",
                self.request.protocol(),
                self.request.host_with_port()
            ),
        }
    }
}

impl LinkResolver for RequestResolver {
    fn call(&self, link_type: &str, id: &str, _data: &NormalizedData) -> Result<Envelope> {
        let value = id.parse::<RequestValue>()?;
        Ok(value_envelope(link_type, id, self.value_of(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestContext;
    use serde_json::{json, Value};

    fn resolver() -> RequestResolver {
        RequestResolver::new(Arc::new(RequestContext::new("https://", "example.com")))
    }

    #[test]
    fn test_host_with_port_and_protocol() {
        let envelope = resolver()
            .call("request", "host_with_port_and_protocol", &NormalizedData::new())
            .expect("recognized id");
        assert_eq!(
            Value::Object(envelope),
            json!({
                "id": "host_with_port_and_protocol",
                "type": "request",
                "value": "https://example.com"
            })
        );
    }

    #[test]
    fn test_unknown_request_id() {
        for id in ["host", "protocol", ""] {
            let err = resolver()
                .call("request", id, &NormalizedData::new())
                .expect_err("unrecognized id");
            assert_eq!(err.to_string(), format!("Unknown request id '{id}'."));
        }
    }
}
