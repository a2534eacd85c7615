//! caravel-cli library
//!
//! Exports the CLI definitions and the entity formatting layer so the
//! binary and the tests share one implementation.

pub mod cli;
pub mod commands;
pub mod endpoint_commands;
pub mod format;
pub mod provider_commands;
pub mod replica_commands;

#[cfg(test)]
mod tests;
