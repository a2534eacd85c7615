//! List and detail formatters for endpoints.

use crate::format::EntityFormatter;
use crate::format::value::{format_opt_timestamp, format_timestamp, pretty_json};

use caravel_core::Endpoint;

use chrono::{DateTime, Utc};

/// Fixed column set for `endpoint list`
pub struct EndpointFormatter;

impl EntityFormatter for EndpointFormatter {
    type Entity = Endpoint;

    fn columns(&self) -> Vec<String> {
        ["ID", "Name", "Type", "Description", "Created"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    fn values(&self, endpoint: &Endpoint) -> Vec<String> {
        vec![
            endpoint.id.clone(),
            endpoint.name.clone(),
            endpoint.endpoint_type.clone(),
            endpoint.description.clone().unwrap_or_default(),
            format_timestamp(&endpoint.created_at),
        ]
    }

    fn created_at(&self, endpoint: &Endpoint) -> DateTime<Utc> {
        endpoint.created_at
    }
}

/// Every field of a single endpoint.
///
/// `connection_info` renders whatever the service stored - for
/// vault-backed endpoints that is the `secret_ref` stub, never the secret.
pub struct EndpointDetailFormatter;

impl EntityFormatter for EndpointDetailFormatter {
    type Entity = Endpoint;

    fn columns(&self) -> Vec<String> {
        [
            "id",
            "name",
            "type",
            "description",
            "connection_info",
            "created",
            "last_updated",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }

    fn values(&self, endpoint: &Endpoint) -> Vec<String> {
        vec![
            endpoint.id.clone(),
            endpoint.name.clone(),
            endpoint.endpoint_type.clone(),
            endpoint.description.clone().unwrap_or_default(),
            pretty_json(endpoint.connection_info.as_ref()),
            format_timestamp(&endpoint.created_at),
            format_opt_timestamp(endpoint.updated_at.as_ref()),
        ]
    }

    fn created_at(&self, endpoint: &Endpoint) -> DateTime<Utc> {
        endpoint.created_at
    }
}
