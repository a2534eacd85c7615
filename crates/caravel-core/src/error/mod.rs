use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed mapping '{token}': expected SOURCE=DESTINATION {location}")]
    MalformedMapping {
        token: String,
        location: ErrorLocation,
    },

    #[error("Invalid schema category: {value} (expected connection, source or destination) {location}")]
    InvalidSchemaCategory {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a malformed-mapping error naming the offending raw token
    #[track_caller]
    pub fn malformed_mapping<S: Into<String>>(token: S) -> Self {
        CoreError::MalformedMapping {
            token: token.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid-schema-category error naming the rejected value
    #[track_caller]
    pub fn invalid_schema_category<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidSchemaCategory {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
