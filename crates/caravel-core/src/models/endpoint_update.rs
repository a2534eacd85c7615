//! Partial-update patch for an endpoint.

use serde::Serialize;
use serde_json::Value;

/// Fields of an endpoint that can be patched after creation.
/// Same partial-patch semantics as [`crate::ReplicaUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_info: Option<Value>,
}

impl EndpointUpdate {
    /// Check whether no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.connection_info.is_none()
    }
}
