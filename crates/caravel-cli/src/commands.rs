use crate::{
    endpoint_commands::EndpointCommands, provider_commands::ProviderCommands,
    replica_commands::ReplicaCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Replica operations
    Replica {
        #[command(subcommand)]
        action: ReplicaCommands,
    },

    /// Endpoint operations
    Endpoint {
        #[command(subcommand)]
        action: EndpointCommands,
    },

    /// Provider operations
    Provider {
        #[command(subcommand)]
        action: ProviderCommands,
    },
}
