use crate::{ClientError, ClientResult};

use std::collections::BTreeMap;

use caravel_core::{
    Endpoint, EndpointUpdate, Execution, Replica, ReplicaUpdate, SchemaCategory, StorageMappings,
};
use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP client for the migration-orchestration REST API.
///
/// Every method is a single request-per-call round-trip (name resolution
/// adds one listing call). Nothing is cached, retried or shared between
/// calls; transient failures propagate directly to the caller.
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://migration.example.com")
    /// * `token` - Optional auth token sent as X-Auth-Token header
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the optional auth header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header("X-Auth-Token", token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        log::debug!("service responded with status {}", status.as_u16());

        let body: Option<Value> = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        if !status.is_success() {
            // Error responses carry {"error": {"code", "message"}}
            if let Some(error) = body.as_ref().and_then(|b| b.get("error")) {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::api(status.as_u16(), code, message));
            }
            return Err(ClientError::api(
                status.as_u16(),
                "UNKNOWN".to_string(),
                String::from_utf8_lossy(&bytes).trim().to_string(),
            ));
        }

        Ok(body.unwrap_or(Value::Null))
    }

    // =========================================================================
    // Replica Operations
    // =========================================================================

    /// List all replicas, including their execution summaries
    pub async fn list_replicas(&self) -> ClientResult<Vec<Replica>> {
        #[derive(Deserialize)]
        struct Envelope {
            replicas: Vec<Replica>,
        }

        let req = self.request(Method::GET, "/api/v1/replicas");
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.replicas)
    }

    /// Get a replica by ID
    pub async fn get_replica(&self, id: &str) -> ClientResult<Replica> {
        #[derive(Deserialize)]
        struct Envelope {
            replica: Replica,
        }

        let req = self.request(Method::GET, &format!("/api/v1/replicas/{}", id));
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.replica)
    }

    /// Create a new replica.
    ///
    /// `origin_endpoint` and `destination_endpoint` may be endpoint names;
    /// both are resolved to service IDs before the create call. Only
    /// supplied optional fields are serialized into the request.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_replica(
        &self,
        origin_endpoint: &str,
        destination_endpoint: &str,
        instances: &[String],
        network_map: Option<&Value>,
        source_environment: Option<&Value>,
        destination_environment: Option<&Value>,
        storage_mappings: Option<&StorageMappings>,
        notes: Option<&str>,
    ) -> ClientResult<Replica> {
        #[derive(Serialize)]
        struct CreateBody<'a> {
            origin_endpoint_id: &'a str,
            destination_endpoint_id: &'a str,
            instances: &'a [String],
            #[serde(skip_serializing_if = "Option::is_none")]
            network_map: Option<&'a Value>,
            #[serde(skip_serializing_if = "Option::is_none")]
            source_environment: Option<&'a Value>,
            #[serde(skip_serializing_if = "Option::is_none")]
            destination_environment: Option<&'a Value>,
            #[serde(skip_serializing_if = "Option::is_none")]
            storage_mappings: Option<&'a StorageMappings>,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct CreateRequest<'a> {
            replica: CreateBody<'a>,
        }

        #[derive(Deserialize)]
        struct Envelope {
            replica: Replica,
        }

        let origin_endpoint_id = self.endpoint_id_for_name(origin_endpoint).await?;
        let destination_endpoint_id = self.endpoint_id_for_name(destination_endpoint).await?;

        let body = CreateRequest {
            replica: CreateBody {
                origin_endpoint_id: &origin_endpoint_id,
                destination_endpoint_id: &destination_endpoint_id,
                instances,
                network_map,
                source_environment,
                destination_environment,
                storage_mappings,
                notes,
            },
        };

        let req = self.request(Method::POST, "/api/v1/replicas").json(&body);
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok(envelope.replica)
    }

    /// Update a replica.
    ///
    /// Partial-patch semantics: only set slots of `patch` are sent; unset
    /// fields stay untouched server-side. An empty patch is rejected here,
    /// before any network call. The service responds with the execution it
    /// spawned to apply the update.
    pub async fn update_replica(
        &self,
        id: &str,
        patch: &ReplicaUpdate,
        force: bool,
    ) -> ClientResult<Execution> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            replica: &'a ReplicaUpdate,
            #[serde(skip_serializing_if = "Option::is_none")]
            force: Option<bool>,
        }

        #[derive(Deserialize)]
        struct Envelope {
            execution: Execution,
        }

        if patch.is_empty() {
            return Err(ClientError::validation(
                "replica update requires at least one field to change",
            ));
        }

        let body = UpdateRequest {
            replica: patch,
            force: force.then_some(true),
        };

        let req = self
            .request(Method::PUT, &format!("/api/v1/replicas/{}", id))
            .json(&body);
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok(envelope.execution)
    }

    /// Delete a replica
    pub async fn delete_replica(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/v1/replicas/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    /// Release a replica's target disks.
    ///
    /// The service spawns an execution for the cleanup and returns it.
    pub async fn delete_replica_disks(&self, id: &str) -> ClientResult<Execution> {
        #[derive(Deserialize)]
        struct Envelope {
            execution: Execution,
        }

        let body = serde_json::json!({"delete-disks": null});
        let req = self
            .request(Method::POST, &format!("/api/v1/replicas/{}/actions", id))
            .json(&body);
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok(envelope.execution)
    }

    // =========================================================================
    // Endpoint Operations
    // =========================================================================

    /// List all endpoints
    pub async fn list_endpoints(&self) -> ClientResult<Vec<Endpoint>> {
        #[derive(Deserialize)]
        struct Envelope {
            endpoints: Vec<Endpoint>,
        }

        let req = self.request(Method::GET, "/api/v1/endpoints");
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.endpoints)
    }

    /// Resolve an endpoint name (or ID) to its service-assigned ID.
    ///
    /// Performs a listing call and a linear search - no caching, every
    /// resolution round-trips to the service. Anything other than exactly
    /// one match is an error, never a silent default.
    pub async fn endpoint_id_for_name(&self, name_or_id: &str) -> ClientResult<String> {
        let endpoints = self.list_endpoints().await?;

        if endpoints.iter().any(|e| e.id == name_or_id) {
            return Ok(name_or_id.to_string());
        }

        let matches: Vec<&Endpoint> = endpoints
            .iter()
            .filter(|e| e.name == name_or_id)
            .collect();

        match matches.as_slice() {
            [endpoint] => Ok(endpoint.id.clone()),
            [] => Err(ClientError::not_found(format!(
                "no endpoint named '{}'",
                name_or_id
            ))),
            _ => Err(ClientError::not_found(format!(
                "multiple endpoints named '{}'; use the endpoint ID instead",
                name_or_id
            ))),
        }
    }

    /// Get an endpoint by name or ID
    pub async fn get_endpoint(&self, name_or_id: &str) -> ClientResult<Endpoint> {
        #[derive(Deserialize)]
        struct Envelope {
            endpoint: Endpoint,
        }

        let id = self.endpoint_id_for_name(name_or_id).await?;
        let req = self.request(Method::GET, &format!("/api/v1/endpoints/{}", id));
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.endpoint)
    }

    /// Create a new endpoint.
    ///
    /// Verifies the platform type is installed server-side first, so a typo
    /// fails with a clear message instead of an opaque service error.
    /// `connection_info` should already be vault-sealed if a secret store is
    /// in use (see [`crate::seal_connection_info`]).
    pub async fn create_endpoint(
        &self,
        name: &str,
        endpoint_type: &str,
        connection_info: &Value,
        description: Option<&str>,
    ) -> ClientResult<Endpoint> {
        #[derive(Serialize)]
        struct CreateBody<'a> {
            name: &'a str,
            #[serde(rename = "type")]
            endpoint_type: &'a str,
            connection_info: &'a Value,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct CreateRequest<'a> {
            endpoint: CreateBody<'a>,
        }

        #[derive(Deserialize)]
        struct Envelope {
            endpoint: Endpoint,
        }

        let providers = self.list_providers().await?;
        if !providers.contains_key(endpoint_type) {
            return Err(ClientError::validation(format!(
                "platform type '{}' is not installed; available: {}",
                endpoint_type,
                providers.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }

        let body = CreateRequest {
            endpoint: CreateBody {
                name,
                endpoint_type,
                connection_info,
                description,
            },
        };

        let req = self.request(Method::POST, "/api/v1/endpoints").json(&body);
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok(envelope.endpoint)
    }

    /// Update an endpoint by name or ID
    pub async fn update_endpoint(
        &self,
        name_or_id: &str,
        patch: &EndpointUpdate,
    ) -> ClientResult<Endpoint> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            endpoint: &'a EndpointUpdate,
        }

        #[derive(Deserialize)]
        struct Envelope {
            endpoint: Endpoint,
        }

        if patch.is_empty() {
            return Err(ClientError::validation(
                "endpoint update requires at least one field to change",
            ));
        }

        let id = self.endpoint_id_for_name(name_or_id).await?;
        let req = self
            .request(Method::PUT, &format!("/api/v1/endpoints/{}", id))
            .json(&UpdateRequest { endpoint: patch });
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok(envelope.endpoint)
    }

    /// Delete an endpoint by name or ID
    pub async fn delete_endpoint(&self, name_or_id: &str) -> ClientResult<()> {
        let id = self.endpoint_id_for_name(name_or_id).await?;
        let req = self.request(Method::DELETE, &format!("/api/v1/endpoints/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    /// Validate an endpoint's connection info server-side.
    ///
    /// Returns `(is_valid, message)`; the message is empty when the service
    /// has nothing to report.
    pub async fn validate_endpoint(&self, name_or_id: &str) -> ClientResult<(bool, String)> {
        #[derive(Deserialize)]
        struct ValidationResult {
            valid: bool,
            #[serde(default)]
            message: String,
        }

        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "validate-connection")]
            validate_connection: ValidationResult,
        }

        let id = self.endpoint_id_for_name(name_or_id).await?;
        let body = serde_json::json!({"validate-connection": null});
        let req = self
            .request(Method::POST, &format!("/api/v1/endpoints/{}/actions", id))
            .json(&body);
        let response = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(response)?;
        Ok((
            envelope.validate_connection.valid,
            envelope.validate_connection.message,
        ))
    }

    /// Validate an endpoint and fail if the connection is invalid.
    ///
    /// Converts a `false` validation result into an error carrying the
    /// service-provided message.
    pub async fn ensure_endpoint_valid(&self, name_or_id: &str) -> ClientResult<()> {
        let (valid, message) = self.validate_endpoint(name_or_id).await?;
        if !valid {
            return Err(ClientError::validation(format!(
                "endpoint validation failed: {}",
                message
            )));
        }
        Ok(())
    }

    // =========================================================================
    // Provider Operations
    // =========================================================================

    /// List platform providers installed server-side
    pub async fn list_providers(&self) -> ClientResult<BTreeMap<String, Value>> {
        #[derive(Deserialize)]
        struct Envelope {
            providers: BTreeMap<String, Value>,
        }

        let req = self.request(Method::GET, "/api/v1/providers");
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.providers)
    }

    /// Fetch the JSON Schema a platform plugin expects for the given
    /// category (connection, source or destination parameters).
    pub async fn schemas(
        &self,
        platform_type: &str,
        category: SchemaCategory,
    ) -> ClientResult<Value> {
        #[derive(Deserialize)]
        struct Envelope {
            schema: Value,
        }

        let req = self.request(
            Method::GET,
            &format!("/api/v1/providers/{}/schemas/{}", platform_type, category),
        );
        let body = self.execute(req).await?;
        let envelope: Envelope = serde_json::from_value(body)?;
        Ok(envelope.schema)
    }
}
