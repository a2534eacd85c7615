use std::panic::Location;

use caravel_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls.
///
/// No variant is retried or swallowed by this layer; every error surfaces
/// to the immediate caller unmodified.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Malformed input caught before any network call
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Name resolution matched zero or multiple entities
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response from the service
    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Connection-level failure; not retried
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Vault operation failure
    #[error("Secret store error: {message} {location}")]
    Secret {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ClientError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, code: S, message: S) -> Self {
        ClientError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a secret store error
    #[track_caller]
    pub fn secret<S: Into<String>>(message: S) -> Self {
        ClientError::Secret {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ClientError::validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
