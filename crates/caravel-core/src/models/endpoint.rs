//! Endpoint entity - a named connection descriptor for a platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key marking a connection-info payload as vault-stored.
pub const SECRET_REF_KEY: &str = "secret_ref";

/// A named, typed connection descriptor for a source or destination platform.
///
/// `connection_info` is an opaque secret payload. When a vault is in use the
/// service stores only a `{"secret_ref": <href>}` stub here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub name: String,
    /// Platform type (e.g. "openstack", "oci", "azure")
    #[serde(rename = "type")]
    pub endpoint_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub connection_info: Option<Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Server fields this client version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Endpoint {
    /// Check whether the connection info is a vault reference stub
    pub fn uses_secret_ref(&self) -> bool {
        self.connection_info
            .as_ref()
            .and_then(Value::as_object)
            .is_some_and(|obj| obj.contains_key(SECRET_REF_KEY))
    }
}
