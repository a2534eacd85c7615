//! Detail formatter for executions spawned by replica operations.

use crate::format::EntityFormatter;
use crate::format::value::format_timestamp;

use caravel_core::Execution;

use chrono::{DateTime, Utc};

pub struct ExecutionDetailFormatter;

impl EntityFormatter for ExecutionDetailFormatter {
    type Entity = Execution;

    fn columns(&self) -> Vec<String> {
        vec![
            "id".to_string(),
            "status".to_string(),
            "created".to_string(),
        ]
    }

    fn values(&self, execution: &Execution) -> Vec<String> {
        vec![
            execution.id.clone(),
            execution.status.clone(),
            format_timestamp(&execution.created_at),
        ]
    }

    fn created_at(&self, execution: &Execution) -> DateTime<Utc> {
        execution.created_at
    }
}
