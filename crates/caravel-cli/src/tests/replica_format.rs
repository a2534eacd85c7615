use crate::format::{EntityFormatter, ReplicaDetailFormatter, ReplicaFormatter};
use crate::tests::{execution, replica};

use caravel_core::StorageMappings;

use serde_json::json;

#[test]
fn test_list_table_one_row_per_replica() {
    let replicas = vec![
        replica("r1", "2024-05-01T00:00:00Z"),
        replica("r2", "2024-05-02T00:00:00Z"),
    ];

    let table = ReplicaFormatter.list_table(&replicas);
    assert_eq!(
        table.columns(),
        &["ID", "Instances", "Last Execution", "Created"]
    );
    assert_eq!(table.rows().len(), 2);
}

#[test]
fn test_list_table_sorted_by_creation_time() {
    let replicas = vec![
        replica("r2", "2024-05-02T00:00:00Z"),
        replica("r1", "2024-05-01T00:00:00Z"),
        replica("r3", "2024-05-03T00:00:00Z"),
    ];

    let table = ReplicaFormatter.list_table(&replicas);
    let ids: Vec<&str> = table.rows().iter().map(|row| row[0].as_str()).collect();
    assert_eq!(ids, ["r1", "r2", "r3"]);
}

#[test]
fn test_list_table_equal_timestamps_keep_input_order() {
    let replicas = vec![
        replica("rb", "2024-05-01T00:00:00Z"),
        replica("ra", "2024-05-01T00:00:00Z"),
    ];

    let table = ReplicaFormatter.list_table(&replicas);
    let ids: Vec<&str> = table.rows().iter().map(|row| row[0].as_str()).collect();
    assert_eq!(ids, ["rb", "ra"]);
}

#[test]
fn test_list_table_last_execution_column() {
    let mut subject = replica("r1", "2024-05-01T00:00:00Z");
    subject.executions = vec![
        execution("e1", "COMPLETED", "2024-05-01T01:00:00Z"),
        execution("e2", "RUNNING", "2024-05-01T02:00:00Z"),
    ];

    let table = ReplicaFormatter.list_table(&[subject]);
    assert_eq!(table.rows()[0][2], "e2 RUNNING");
}

#[test]
fn test_detail_table_is_field_value_pairs() {
    let subject = replica("r1", "2024-05-01T00:00:00Z");

    let table = ReplicaDetailFormatter::new(false).detail_table(&subject);
    assert_eq!(table.columns(), &["Field", "Value"]);

    let fields: Vec<&str> = table.rows().iter().map(|row| row[0].as_str()).collect();
    assert!(fields.contains(&"id"));
    assert!(fields.contains(&"origin_endpoint_id"));
    assert!(fields.contains(&"executions"));
    assert!(!fields.contains(&"instances_data"));
}

#[test]
fn test_detail_table_includes_telemetry_only_on_request() {
    let mut subject = replica("r1", "2024-05-01T00:00:00Z");
    subject.info = Some(json!({"vm1": {"progress": 42}}));

    let table = ReplicaDetailFormatter::new(true).detail_table(&subject);
    let telemetry = table
        .rows()
        .iter()
        .find(|row| row[0] == "instances_data")
        .unwrap();
    assert!(telemetry[1].contains("\"progress\": 42"));
}

#[test]
fn test_detail_table_core_values() {
    let mut subject = replica("r1", "2024-05-01T00:00:00Z");
    subject.instances = vec!["vm2".to_string(), "vm1".to_string()];
    subject.network_map = Some(json!({"net1": "net2"}));
    subject.notes = Some("first sync".to_string());

    let table = ReplicaDetailFormatter::new(false).detail_table(&subject);
    let value_of = |field: &str| {
        table
            .rows()
            .iter()
            .find(|row| row[0] == field)
            .map(|row| row[1].clone())
            .unwrap()
    };

    assert_eq!(value_of("id"), "r1");
    assert_eq!(value_of("origin_endpoint_id"), "id-1");
    assert_eq!(value_of("destination_endpoint_id"), "id-2");
    // Instances display alphabetically regardless of input order
    assert_eq!(value_of("instances"), "vm1\nvm2");
    assert!(value_of("network_map").contains("\"net1\": \"net2\""));
    assert_eq!(value_of("notes"), "first sync");
    assert_eq!(value_of("created"), "2024-05-01T00:00:00Z");
    assert_eq!(value_of("last_updated"), "");
}

#[test]
fn test_detail_table_decomposes_storage_mappings() {
    let mut subject = replica("r1", "2024-05-01T00:00:00Z");
    subject.storage_mappings = Some(
        StorageMappings::from_args(
            Some("ceph".to_string()),
            &["iscsi=ceph-ssd".to_string()],
            &["disk-1=ceph-hdd".to_string()],
        )
        .unwrap()
        .unwrap(),
    );

    let table = ReplicaDetailFormatter::new(false).detail_table(&subject);
    let value_of = |field: &str| {
        table
            .rows()
            .iter()
            .find(|row| row[0] == field)
            .map(|row| row[1].clone())
            .unwrap()
    };

    assert_eq!(value_of("default_storage_backend"), "ceph");
    assert_eq!(value_of("storage_backend_mappings"), "iscsi=ceph-ssd");
    assert_eq!(value_of("disk_storage_mappings"), "disk-1=ceph-hdd");
}

#[test]
fn test_detail_table_execution_history_ascending() {
    let mut subject = replica("r1", "2024-05-01T00:00:00Z");
    subject.executions = vec![
        execution("e2", "RUNNING", "2024-05-01T02:00:00Z"),
        execution("e1", "COMPLETED", "2024-05-01T01:00:00Z"),
    ];

    let table = ReplicaDetailFormatter::new(false).detail_table(&subject);
    let history = table
        .rows()
        .iter()
        .find(|row| row[0] == "executions")
        .unwrap();
    assert_eq!(history[1], "e1 COMPLETED\ne2 RUNNING");
}
