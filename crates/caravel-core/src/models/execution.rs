//! Execution entity - one run of a replica's task graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single run of a replica's underlying task graph.
///
/// Executions are never constructed by the client; the service spawns them
/// as a side effect of replica operations (update, delete-disks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// Server fields this client version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
