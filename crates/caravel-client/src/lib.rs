//! HTTP client SDK for the Caravel migration-orchestration service.
//!
//! [`Client`] exposes one typed method per lifecycle operation; the
//! [`secrets`] module provides optional vault indirection for endpoint
//! connection info.

pub mod client;
pub mod secrets;

pub use client::{Client, ClientError, ClientResult};
pub use secrets::{
    SecretStore, endpoint_connection_info, open_connection_info, seal_connection_info,
};

#[cfg(test)]
mod tests;
