//! Storage mappings and the CLI-side mapping-argument parser.
//!
//! A replica carries up to three levels of storage mapping, from least to
//! most specific:
//!
//! 1. `default_storage_backend` - used when nothing more specific matches
//! 2. `backend_mappings` - source backend id to destination backend id
//! 3. `disk_mappings` - source disk id to destination disk id
//!
//! Disk entries always override backend entries for the same disk.
//!
//! On the wire the mappings travel as a JSON object; on the command line they
//! are built from repeated `SOURCE=DESTINATION` flags. Both construction
//! paths fail fast on malformed input, before any network call is made.

use crate::error::{CoreError, Result};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Source-backend to destination-backend association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMapping {
    pub source: String,
    pub destination: String,
}

/// Source-disk to destination-backend association.
/// The most specific mapping level; overrides backend mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskMapping {
    pub disk_id: String,
    pub destination: String,
}

/// Structured storage mappings for a replica.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageMappings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_storage_backend: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backend_mappings: Vec<BackendMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disk_mappings: Vec<DiskMapping>,
}

impl StorageMappings {
    /// Build storage mappings from raw CLI flag values.
    ///
    /// `backend_tokens` and `disk_tokens` are `SOURCE=DESTINATION` /
    /// `DISK_ID=DESTINATION` tokens in the order they were supplied.
    /// Returns `Ok(None)` when nothing at all was supplied, so callers can
    /// tell "no mappings given" apart from "empty mappings given".
    pub fn from_args(
        default_storage_backend: Option<String>,
        backend_tokens: &[String],
        disk_tokens: &[String],
    ) -> Result<Option<StorageMappings>> {
        if default_storage_backend.is_none() && backend_tokens.is_empty() && disk_tokens.is_empty()
        {
            return Ok(None);
        }

        let backend_mappings = backend_tokens
            .iter()
            .map(|token| {
                let (source, destination) = split_mapping_token(token)?;
                Ok(BackendMapping {
                    source,
                    destination,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let disk_mappings = disk_tokens
            .iter()
            .map(|token| {
                let (disk_id, destination) = split_mapping_token(token)?;
                Ok(DiskMapping {
                    disk_id,
                    destination,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(StorageMappings {
            default_storage_backend,
            backend_mappings,
            disk_mappings,
        }))
    }

    /// Flatten into `(default, backend_map, disk_map)`.
    ///
    /// Keys are unique; the last-specified entry wins on duplicates. No
    /// ordering guarantee beyond the maps' own key order - mappings are
    /// queried by key, not iterated.
    pub fn flattened(
        &self,
    ) -> (
        Option<String>,
        BTreeMap<String, String>,
        BTreeMap<String, String>,
    ) {
        let mut backends = BTreeMap::new();
        for mapping in &self.backend_mappings {
            backends.insert(mapping.source.clone(), mapping.destination.clone());
        }

        let mut disks = BTreeMap::new();
        for mapping in &self.disk_mappings {
            disks.insert(mapping.disk_id.clone(), mapping.destination.clone());
        }

        (self.default_storage_backend.clone(), backends, disks)
    }

    /// Resolve the destination backend for a disk.
    ///
    /// Precedence: disk mapping, then the mapping of the disk's source
    /// backend, then the default backend.
    pub fn destination_for(&self, disk_id: &str, backend_id: Option<&str>) -> Option<String> {
        let (default, backends, disks) = self.flattened();

        if let Some(destination) = disks.get(disk_id) {
            return Some(destination.clone());
        }
        if let Some(backend_id) = backend_id
            && let Some(destination) = backends.get(backend_id)
        {
            return Some(destination.clone());
        }
        default
    }

    /// Check whether no mapping of any level is present
    pub fn is_empty(&self) -> bool {
        self.default_storage_backend.is_none()
            && self.backend_mappings.is_empty()
            && self.disk_mappings.is_empty()
    }
}

/// Split a `SOURCE=DESTINATION` token.
///
/// Only the first `=` separates; the destination may itself contain `=`.
/// A token with no `=` or an empty side fails with
/// [`CoreError::MalformedMapping`] naming the raw token.
pub fn split_mapping_token(token: &str) -> Result<(String, String)> {
    match token.split_once('=') {
        Some((source, destination)) if !source.is_empty() && !destination.is_empty() => {
            Ok((source.to_string(), destination.to_string()))
        }
        _ => Err(CoreError::malformed_mapping(token)),
    }
}

/// Parse repeated mapping tokens into a map; last-specified wins on
/// duplicate sources.
pub fn parse_mapping_tokens(tokens: &[String]) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for token in tokens {
        let (source, destination) = split_mapping_token(token)?;
        map.insert(source, destination);
    }
    Ok(map)
}

/// Render a mapping as one `source=destination` line per entry.
///
/// Inverse of [`parse_mapping_tokens`] for well-formed input.
pub fn format_mapping(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(source, destination)| format!("{source}={destination}"))
        .collect::<Vec<_>>()
        .join("\n")
}
