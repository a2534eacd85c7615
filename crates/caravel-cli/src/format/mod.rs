//! Entity formatting: turning domain objects into ordered column tables.
//!
//! Formatters are pure projections - they never mutate the entities they
//! display. Each entity type gets a list formatter (fixed column set, one
//! row per entity, sorted by creation time) and a detail formatter (one
//! Field/Value row per semantically relevant field).

pub(crate) mod endpoint;
pub(crate) mod execution;
pub(crate) mod replica;
pub(crate) mod table;
pub(crate) mod value;

pub use endpoint::{EndpointDetailFormatter, EndpointFormatter};
pub use execution::ExecutionDetailFormatter;
pub use replica::{ReplicaDetailFormatter, ReplicaFormatter};
pub use table::Table;

use chrono::{DateTime, Utc};

/// Projection of one entity type into an ordered table.
pub trait EntityFormatter {
    type Entity;

    /// Column headers, in display order
    fn columns(&self) -> Vec<String>;

    /// One row of values for a single entity, aligned with `columns()`
    fn values(&self, entity: &Self::Entity) -> Vec<String>;

    /// Sort key for list output
    fn created_at(&self, entity: &Self::Entity) -> DateTime<Utc>;

    /// One row per entity, sorted ascending by creation timestamp.
    /// The sort is stable: entities with equal timestamps keep input order.
    fn list_table(&self, entities: &[Self::Entity]) -> Table {
        let mut ordered: Vec<&Self::Entity> = entities.iter().collect();
        ordered.sort_by_key(|e| self.created_at(e));

        Table::new(
            self.columns(),
            ordered.iter().map(|e| self.values(e)).collect(),
        )
    }

    /// Field/Value table covering every column for a single entity
    fn detail_table(&self, entity: &Self::Entity) -> Table {
        let rows = self
            .columns()
            .into_iter()
            .zip(self.values(entity))
            .map(|(column, value)| vec![column, value])
            .collect();

        Table::new(vec!["Field".to_string(), "Value".to_string()], rows)
    }
}
