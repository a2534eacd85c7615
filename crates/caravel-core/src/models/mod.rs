pub mod endpoint;
pub mod endpoint_update;
pub mod execution;
pub mod replica;
pub mod replica_update;
pub mod schema_category;
pub mod storage_mappings;
