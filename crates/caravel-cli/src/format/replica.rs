//! List and detail formatters for replicas.

use crate::format::EntityFormatter;
use crate::format::value::{
    execution_history, format_opt_timestamp, format_timestamp, last_execution, pretty_json,
};

use caravel_core::{Replica, StorageMappings, format_mapping};

use chrono::{DateTime, Utc};

fn strings(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// Fixed column set for `replica list`
pub struct ReplicaFormatter;

impl EntityFormatter for ReplicaFormatter {
    type Entity = Replica;

    fn columns(&self) -> Vec<String> {
        strings(&["ID", "Instances", "Last Execution", "Created"])
    }

    fn values(&self, replica: &Replica) -> Vec<String> {
        vec![
            replica.id.clone(),
            replica.instances.join("\n"),
            last_execution(&replica.executions),
            format_timestamp(&replica.created_at),
        ]
    }

    fn created_at(&self, replica: &Replica) -> DateTime<Utc> {
        replica.created_at
    }
}

/// Every semantically relevant field of a single replica.
///
/// Storage mappings are decomposed into their three levels; the instance
/// telemetry blob is only included on explicit request since it can be
/// very large.
pub struct ReplicaDetailFormatter {
    show_instances_data: bool,
}

impl ReplicaDetailFormatter {
    pub fn new(show_instances_data: bool) -> Self {
        Self { show_instances_data }
    }
}

impl EntityFormatter for ReplicaDetailFormatter {
    type Entity = Replica;

    fn columns(&self) -> Vec<String> {
        let mut columns = strings(&[
            "id",
            "created",
            "last_updated",
            "instances",
            "origin_endpoint_id",
            "destination_endpoint_id",
            "destination_environment",
            "source_environment",
            "network_map",
            "disk_storage_mappings",
            "storage_backend_mappings",
            "default_storage_backend",
            "notes",
            "executions",
        ]);

        if self.show_instances_data {
            columns.push("instances_data".to_string());
        }

        columns
    }

    fn values(&self, replica: &Replica) -> Vec<String> {
        let (default_storage, backend_mappings, disk_mappings) = replica
            .storage_mappings
            .as_ref()
            .map(StorageMappings::flattened)
            .unwrap_or_default();

        let mut instances = replica.instances.clone();
        instances.sort();

        let mut values = vec![
            replica.id.clone(),
            format_timestamp(&replica.created_at),
            format_opt_timestamp(replica.updated_at.as_ref()),
            instances.join("\n"),
            replica.origin_endpoint_id.clone(),
            replica.destination_endpoint_id.clone(),
            pretty_json(replica.destination_environment.as_ref()),
            pretty_json(replica.source_environment.as_ref()),
            pretty_json(replica.network_map.as_ref()),
            format_mapping(&disk_mappings),
            format_mapping(&backend_mappings),
            default_storage.unwrap_or_default(),
            replica.notes.clone().unwrap_or_default(),
            execution_history(&replica.executions),
        ];

        if self.show_instances_data {
            values.push(pretty_json(replica.info.as_ref()));
        }

        values
    }

    fn created_at(&self, replica: &Replica) -> DateTime<Utc> {
        replica.created_at
    }
}
