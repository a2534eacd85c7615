use clap::Subcommand;

#[derive(Subcommand)]
pub enum EndpointCommands {
    /// Create a new endpoint
    Create {
        /// Endpoint name
        #[arg(long)]
        name: String,

        /// Platform type (e.g. openstack, oci, azure)
        #[arg(long = "type")]
        endpoint_type: String,

        /// JSON encoded connection info for the platform
        #[arg(long)]
        connection_info: String,

        /// Endpoint description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show an endpoint
    Show {
        /// Endpoint name or ID
        endpoint: String,
    },

    /// List endpoints
    List,

    /// Update an endpoint
    Update {
        /// Endpoint name or ID
        endpoint: String,

        /// New endpoint name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New JSON encoded connection info
        #[arg(long)]
        connection_info: Option<String>,
    },

    /// Delete an endpoint
    Delete {
        /// Endpoint name or ID
        endpoint: String,
    },

    /// Validate an endpoint's connection server-side
    Validate {
        /// Endpoint name or ID
        endpoint: String,
    },
}
