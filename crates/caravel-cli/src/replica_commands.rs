use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReplicaCommands {
    /// Create a new replica
    Create {
        /// Origin endpoint name or ID
        #[arg(long)]
        origin_endpoint: String,

        /// Destination endpoint name or ID
        #[arg(long)]
        destination_endpoint: String,

        /// An instance to be replicated; can be specified multiple times
        #[arg(long = "instance", required = true)]
        instances: Vec<String>,

        /// JSON mapping between source and destination network identifiers
        #[arg(long)]
        network_map: String,

        /// JSON encoded data related to the source's environment
        #[arg(long)]
        source_environment: Option<String>,

        /// JSON encoded data related to the destination's environment
        #[arg(long)]
        destination_environment: Option<String>,

        /// Storage backend used when no more specific mapping applies
        #[arg(long)]
        default_storage_backend: Option<String>,

        /// SOURCE=DESTINATION storage backend mapping; repeatable
        #[arg(long = "storage-backend-mapping")]
        storage_backend_mappings: Vec<String>,

        /// DISK_ID=DESTINATION disk-level override; repeatable
        #[arg(long = "disk-storage-mapping")]
        disk_storage_mappings: Vec<String>,

        /// Notes about the replica
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show a replica
    Show {
        /// The replica's ID
        id: String,

        /// Include the instance telemetry used for task execution;
        /// useful for troubleshooting
        #[arg(long)]
        show_instances_data: bool,
    },

    /// List replicas
    List,

    /// Update a replica
    Update {
        /// The replica's ID
        id: String,

        /// JSON encoded data related to the source's environment
        #[arg(long)]
        source_environment: Option<String>,

        /// JSON encoded data related to the destination's environment
        #[arg(long)]
        destination_environment: Option<String>,

        /// JSON mapping between source and destination network identifiers
        #[arg(long)]
        network_map: Option<String>,

        /// Storage backend used when no more specific mapping applies
        #[arg(long)]
        default_storage_backend: Option<String>,

        /// SOURCE=DESTINATION storage backend mapping; repeatable
        #[arg(long = "storage-backend-mapping")]
        storage_backend_mappings: Vec<String>,

        /// DISK_ID=DESTINATION disk-level override; repeatable
        #[arg(long = "disk-storage-mapping")]
        disk_storage_mappings: Vec<String>,

        /// Notes about the replica
        #[arg(long)]
        notes: Option<String>,

        /// Ignore errors on updating the replica's source parameters.
        /// May leave the replica inconsistent if misused.
        #[arg(long)]
        force: bool,
    },

    /// Delete a replica
    Delete {
        /// The replica's ID
        id: String,
    },

    /// Delete a replica's target disks
    DeleteDisks {
        /// The replica's ID
        id: String,
    },
}
