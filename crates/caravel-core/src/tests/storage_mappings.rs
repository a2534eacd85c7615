use crate::{
    CoreError, StorageMappings, format_mapping, parse_mapping_tokens, split_mapping_token,
};

use std::collections::BTreeMap;

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_split_mapping_token() {
    let (source, destination) = split_mapping_token("iscsi=ceph").unwrap();
    assert_eq!(source, "iscsi");
    assert_eq!(destination, "ceph");
}

#[test]
fn test_split_mapping_token_destination_may_contain_equals() {
    let (source, destination) = split_mapping_token("disk-1=pool=fast").unwrap();
    assert_eq!(source, "disk-1");
    assert_eq!(destination, "pool=fast");
}

#[test]
fn test_split_mapping_token_no_separator_fails() {
    let err = split_mapping_token("badtoken").unwrap_err();
    match err {
        CoreError::MalformedMapping { ref token, .. } => assert_eq!(token, "badtoken"),
        other => panic!("expected MalformedMapping, got {other:?}"),
    }
    assert!(err.to_string().contains("badtoken"));
}

#[test]
fn test_split_mapping_token_empty_side_fails() {
    assert!(split_mapping_token("=ceph").is_err());
    assert!(split_mapping_token("iscsi=").is_err());
    assert!(split_mapping_token("=").is_err());
}

#[test]
fn test_parse_mapping_tokens_last_wins() {
    let map = parse_mapping_tokens(&strings(&["a=1", "b=2", "a=3"])).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], "3");
    assert_eq!(map["b"], "2");
}

#[test]
fn test_format_parse_round_trip() {
    let mut map = BTreeMap::new();
    map.insert("net-a".to_string(), "net-b".to_string());
    map.insert("net-c".to_string(), "net-d".to_string());

    let formatted = format_mapping(&map);
    let tokens: Vec<String> = formatted.lines().map(String::from).collect();
    let reparsed = parse_mapping_tokens(&tokens).unwrap();

    assert_eq!(reparsed, map);
}

#[test]
fn test_from_args_nothing_supplied_is_none() {
    let mappings = StorageMappings::from_args(None, &[], &[]).unwrap();
    assert!(mappings.is_none());
}

#[test]
fn test_from_args_builds_all_levels() {
    let mappings = StorageMappings::from_args(
        Some("ceph".to_string()),
        &strings(&["iscsi=ceph-ssd"]),
        &strings(&["disk-1=ceph-hdd"]),
    )
    .unwrap()
    .unwrap();

    assert_eq!(mappings.default_storage_backend.as_deref(), Some("ceph"));
    assert_eq!(mappings.backend_mappings.len(), 1);
    assert_eq!(mappings.backend_mappings[0].source, "iscsi");
    assert_eq!(mappings.disk_mappings.len(), 1);
    assert_eq!(mappings.disk_mappings[0].destination, "ceph-hdd");
}

#[test]
fn test_from_args_malformed_token_fails() {
    let err = StorageMappings::from_args(None, &strings(&["badtoken"]), &[]).unwrap_err();
    assert!(matches!(err, CoreError::MalformedMapping { .. }));
}

#[test]
fn test_flattened_last_wins_on_duplicates() {
    let mappings = StorageMappings::from_args(
        None,
        &strings(&["iscsi=first", "iscsi=second"]),
        &strings(&["disk-1=old", "disk-1=new"]),
    )
    .unwrap()
    .unwrap();

    let (default, backends, disks) = mappings.flattened();
    assert!(default.is_none());
    assert_eq!(backends["iscsi"], "second");
    assert_eq!(disks["disk-1"], "new");
}

#[test]
fn test_disk_mapping_overrides_backend_mapping() {
    let mappings = StorageMappings::from_args(
        Some("default-backend".to_string()),
        &strings(&["backend-1=via-backend"]),
        &strings(&["disk-1=via-disk"]),
    )
    .unwrap()
    .unwrap();

    // Disk-level entry wins even though the disk's backend is also mapped
    assert_eq!(
        mappings.destination_for("disk-1", Some("backend-1")),
        Some("via-disk".to_string())
    );
    // Unmapped disk falls back to its backend's mapping
    assert_eq!(
        mappings.destination_for("disk-2", Some("backend-1")),
        Some("via-backend".to_string())
    );
    // Nothing specific at all falls back to the default
    assert_eq!(
        mappings.destination_for("disk-3", Some("backend-9")),
        Some("default-backend".to_string())
    );
}

#[test]
fn test_destination_for_no_match_and_no_default() {
    let mappings = StorageMappings::from_args(None, &strings(&["backend-1=dest"]), &[])
        .unwrap()
        .unwrap();
    assert_eq!(mappings.destination_for("disk-1", None), None);
}

#[test]
fn test_wire_format_round_trip() {
    let raw = serde_json::json!({
        "default_storage_backend": "ceph",
        "backend_mappings": [{"source": "iscsi", "destination": "ceph-ssd"}],
        "disk_mappings": [{"disk_id": "disk-1", "destination": "ceph-hdd"}]
    });

    let mappings: StorageMappings = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&mappings).unwrap(), raw);
}

#[test]
fn test_wire_format_missing_subfield_fails() {
    let raw = serde_json::json!({
        "disk_mappings": [{"disk_id": "disk-1"}]
    });
    assert!(serde_json::from_value::<StorageMappings>(raw).is_err());
}

#[test]
fn test_empty_collections_omitted_from_wire_format() {
    let mappings = StorageMappings {
        default_storage_backend: Some("ceph".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&mappings).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("backend_mappings"));
    assert!(!obj.contains_key("disk_mappings"));
}
