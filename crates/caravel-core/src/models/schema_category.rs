//! Schema category for provider JSON Schema lookups.

use crate::error::CoreError;

use std::fmt;
use std::str::FromStr;

/// Which JSON Schema document to fetch for a platform type.
///
/// Used by callers to validate payloads client-side before submission; the
/// service re-validates regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCategory {
    /// Connection-info parameters for an endpoint of this platform
    Connection,
    /// Source-environment parameters
    Source,
    /// Destination-environment parameters
    Destination,
}

impl SchemaCategory {
    /// URL path segment for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaCategory::Connection => "connection",
            SchemaCategory::Source => "source",
            SchemaCategory::Destination => "destination",
        }
    }
}

impl fmt::Display for SchemaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "connection" => Ok(SchemaCategory::Connection),
            "source" => Ok(SchemaCategory::Source),
            "destination" => Ok(SchemaCategory::Destination),
            _ => Err(CoreError::invalid_schema_category(value)),
        }
    }
}
