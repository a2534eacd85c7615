//! Configuration discovery for the Caravel CLI.
//!
//! No process-wide state: `Config::load()` builds an explicit value at
//! startup which callers pass down to the client.

mod api_config;
mod config;
mod error;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};

#[cfg(test)]
mod tests;
