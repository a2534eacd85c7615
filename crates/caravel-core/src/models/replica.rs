//! Replica entity - a migration-replication job specification.

use crate::models::execution::Execution;
use crate::models::storage_mappings::StorageMappings;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A specification for replication between a source and destination endpoint.
///
/// The core identity (endpoints, instances) is immutable after creation;
/// environments, network map, storage mappings and notes can be patched via
/// [`crate::ReplicaUpdate`].
///
/// The environment and network-map fields are opaque JSON blobs owned by the
/// platform plugins server-side. They are kept as raw [`Value`]s and only
/// pretty-printed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replica {
    pub id: String,
    pub origin_endpoint_id: String,
    pub destination_endpoint_id: String,
    /// Source instance identifiers covered by this replica
    #[serde(default)]
    pub instances: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source_environment: Option<Value>,
    #[serde(default)]
    pub destination_environment: Option<Value>,
    /// Source-network-id to destination-network-id mapping
    #[serde(default)]
    pub network_map: Option<Value>,
    #[serde(default)]
    pub storage_mappings: Option<StorageMappings>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub executions: Vec<Execution>,
    /// Detailed per-instance telemetry gathered during task execution.
    /// Potentially large; only displayed on explicit request.
    #[serde(default)]
    pub info: Option<Value>,
    /// Server fields this client version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
