//! Partial-update patch for a replica.

use crate::models::storage_mappings::StorageMappings;

use serde::Serialize;
use serde_json::Value;

/// Fields of a replica that can be patched after creation.
///
/// Every field is an explicit optional slot; only set slots serialize into
/// the outgoing patch, so unset fields are left untouched server-side.
/// "Was supplied" decides, not truthiness: a supplied empty string or empty
/// map is sent like any other value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplicaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_environment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_environment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_map: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_mappings: Option<StorageMappings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReplicaUpdate {
    /// Check whether no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.source_environment.is_none()
            && self.destination_environment.is_none()
            && self.network_map.is_none()
            && self.storage_mappings.is_none()
            && self.notes.is_none()
    }
}
