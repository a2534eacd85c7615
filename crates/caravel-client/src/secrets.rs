//! Optional vault indirection for endpoint connection info.
//!
//! When a [`SecretStore`] is available, sensitive connection-info payloads
//! are stored externally and replaced with a `{"secret_ref": <href>}` stub
//! before they reach the API; only a holder of vault credentials can resolve
//! the stub back. Without a store, payloads pass through unchanged - this
//! indirection is orthogonal to every other component.

use crate::{Client, ClientError, ClientResult};

use async_trait::async_trait;
use caravel_core::SECRET_REF_KEY;
use serde_json::Value;

/// External vault collaborator.
///
/// Session setup and credentials are entirely the implementor's concern;
/// this layer only stores and fetches opaque string payloads.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Store a payload under a human-readable label, returning a reference
    async fn store(&self, label: &str, payload: &str) -> ClientResult<String>;

    /// Fetch the payload a reference points at
    async fn fetch(&self, reference: &str) -> ClientResult<String>;
}

/// Seal connection info for submission.
///
/// With a store: serialize the payload, store it under `label` and return
/// the `{"secret_ref": <href>}` stub. Without one: return the payload
/// unchanged. The raw secret never reaches the API when a store is in use.
pub async fn seal_connection_info(
    store: Option<&dyn SecretStore>,
    label: &str,
    connection_info: &Value,
) -> ClientResult<Value> {
    let Some(store) = store else {
        return Ok(connection_info.clone());
    };

    let payload = serde_json::to_string(connection_info)?;
    let reference = store.store(label, &payload).await?;

    Ok(serde_json::json!({ SECRET_REF_KEY: reference }))
}

/// Resolve stored connection info back to its real payload.
///
/// If `connection_info` carries a `secret_ref`, the payload is fetched from
/// the store and JSON-decoded; otherwise it is returned as-is.
pub async fn open_connection_info(
    store: Option<&dyn SecretStore>,
    connection_info: &Value,
) -> ClientResult<Value> {
    let reference = connection_info
        .as_object()
        .and_then(|obj| obj.get(SECRET_REF_KEY));

    let Some(reference) = reference else {
        return Ok(connection_info.clone());
    };

    let reference = reference.as_str().ok_or_else(|| {
        ClientError::secret(format!("{} is not a string reference", SECRET_REF_KEY))
    })?;

    let Some(store) = store else {
        return Err(ClientError::secret(format!(
            "connection info carries a {} but no secret store is configured",
            SECRET_REF_KEY
        )));
    };

    let payload = store.fetch(reference).await?;
    Ok(serde_json::from_str(&payload)?)
}

/// Fetch an endpoint's connection info, resolving vault indirection.
pub async fn endpoint_connection_info(
    client: &Client,
    store: Option<&dyn SecretStore>,
    name_or_id: &str,
) -> ClientResult<Value> {
    let endpoint = client.get_endpoint(name_or_id).await?;
    let connection_info = endpoint.connection_info.unwrap_or(Value::Null);
    open_connection_info(store, &connection_info).await
}
