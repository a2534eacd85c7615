//! Domain model for the Caravel migration client.
//!
//! Entities mirror what the migration service returns: immutable value
//! snapshots with a fixed field set. Fields the service adds in later
//! versions are preserved in a flattened side-map rather than dropped.

pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::endpoint::{Endpoint, SECRET_REF_KEY};
pub use models::endpoint_update::EndpointUpdate;
pub use models::execution::Execution;
pub use models::replica::Replica;
pub use models::replica_update::ReplicaUpdate;
pub use models::schema_category::SchemaCategory;
pub use models::storage_mappings::{
    BackendMapping, DiskMapping, StorageMappings, format_mapping, parse_mapping_tokens,
    split_mapping_token,
};

#[cfg(test)]
mod tests;
