mod replica_format;
mod table;

use caravel_core::{Endpoint, Execution, Replica};

use chrono::{DateTime, Utc};
use serde_json::Map;

pub(crate) fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

pub(crate) fn execution(id: &str, status: &str, created: &str) -> Execution {
    Execution {
        id: id.to_string(),
        status: status.to_string(),
        created_at: ts(created),
        extra: Map::new(),
    }
}

pub(crate) fn replica(id: &str, created: &str) -> Replica {
    Replica {
        id: id.to_string(),
        origin_endpoint_id: "id-1".to_string(),
        destination_endpoint_id: "id-2".to_string(),
        instances: vec!["vm1".to_string()],
        notes: None,
        source_environment: None,
        destination_environment: None,
        network_map: None,
        storage_mappings: None,
        created_at: ts(created),
        updated_at: None,
        executions: Vec::new(),
        info: None,
        extra: Map::new(),
    }
}

pub(crate) fn endpoint(id: &str, name: &str, created: &str) -> Endpoint {
    Endpoint {
        id: id.to_string(),
        name: name.to_string(),
        endpoint_type: "openstack".to_string(),
        description: None,
        connection_info: None,
        created_at: ts(created),
        updated_at: None,
        extra: Map::new(),
    }
}
