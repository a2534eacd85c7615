use serde::Deserialize;

/// Connection settings for the migration service API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://migration.example.com")
    pub url: Option<String>,
    /// Auth token sent as X-Auth-Token; session establishment itself is
    /// external to this client
    pub token: Option<String>,
}
