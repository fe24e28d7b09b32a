//! The parts of an inbound HTTP request that links can refer to.

use serde::Deserialize;

/// Request-like object exposing the fields request links read.
pub trait RequestInfo: Send + Sync {
    /// Scheme including separator, e.g. `https://`.
    fn protocol(&self) -> &str;
    /// Host and, when non-default, port, e.g. `example.com:3000`.
    fn host_with_port(&self) -> &str;
}

/// Plain request snapshot, usable from configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestContext {
    pub protocol: String,
    pub host_with_port: String,
}

impl RequestContext {
    pub fn new(protocol: impl Into<String>, host_with_port: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host_with_port: host_with_port.into(),
        }
    }
}

impl RequestInfo for RequestContext {
    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn host_with_port(&self) -> &str {
        &self.host_with_port
    }
}
