//! caravel - Migration replica orchestration CLI
//!
//! A command-line client for a migration-orchestration service.
//!
//! # Examples
//!
//! ```bash
//! # List replicas
//! caravel replica list
//!
//! # Create a replica between two named endpoints
//! caravel replica create --origin-endpoint srcA --destination-endpoint dstB \
//!     --instance vm1 --network-map '{"net1": "net2"}'
//!
//! # Update notes, forcing past source-side errors
//! caravel replica update <id> --notes "maintenance window" --force
//! ```

use caravel_cli::{
    cli::Cli,
    commands::Commands,
    endpoint_commands::EndpointCommands,
    format::{
        EndpointDetailFormatter, EndpointFormatter, EntityFormatter, ExecutionDetailFormatter,
        ReplicaDetailFormatter, ReplicaFormatter, Table,
    },
    provider_commands::ProviderCommands,
    replica_commands::ReplicaCommands,
};

use caravel_client::{Client, ClientError, ClientResult};
use caravel_config::Config;
use caravel_core::{EndpointUpdate, ReplicaUpdate, SchemaCategory, StorageMappings};

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Resolve service URL: explicit flag > env/config file > error
    let server = match cli.server.or(config.api.url) {
        Some(url) => url,
        None => return missing_server_exit(),
    };
    let token = cli.token.or(config.api.token);

    let client = Client::new(&server, token.as_deref());

    match run(&client, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> ClientResult<ExitCode> {
    match command {
        // Replica commands
        Commands::Replica { action } => match action {
            ReplicaCommands::Create {
                origin_endpoint,
                destination_endpoint,
                instances,
                network_map,
                source_environment,
                destination_environment,
                default_storage_backend,
                storage_backend_mappings,
                disk_storage_mappings,
                notes,
            } => {
                let network_map = parse_json_arg("network-map", &network_map)?;
                let source_environment =
                    parse_opt_json_arg("source-environment", source_environment.as_deref())?;
                let destination_environment = parse_opt_json_arg(
                    "destination-environment",
                    destination_environment.as_deref(),
                )?;
                let storage_mappings = StorageMappings::from_args(
                    default_storage_backend,
                    &storage_backend_mappings,
                    &disk_storage_mappings,
                )?;

                let replica = client
                    .create_replica(
                        &origin_endpoint,
                        &destination_endpoint,
                        &instances,
                        Some(&network_map),
                        source_environment.as_ref(),
                        destination_environment.as_ref(),
                        storage_mappings.as_ref(),
                        notes.as_deref(),
                    )
                    .await?;

                print_table(&ReplicaDetailFormatter::new(false).detail_table(&replica));
            }

            ReplicaCommands::Show {
                id,
                show_instances_data,
            } => {
                let replica = client.get_replica(&id).await?;
                print_table(
                    &ReplicaDetailFormatter::new(show_instances_data).detail_table(&replica),
                );
            }

            ReplicaCommands::List => {
                let replicas = client.list_replicas().await?;
                print_table(&ReplicaFormatter.list_table(&replicas));
            }

            ReplicaCommands::Update {
                id,
                source_environment,
                destination_environment,
                network_map,
                default_storage_backend,
                storage_backend_mappings,
                disk_storage_mappings,
                notes,
                force,
            } => {
                let patch = ReplicaUpdate {
                    source_environment: parse_opt_json_arg(
                        "source-environment",
                        source_environment.as_deref(),
                    )?,
                    destination_environment: parse_opt_json_arg(
                        "destination-environment",
                        destination_environment.as_deref(),
                    )?,
                    network_map: parse_opt_json_arg("network-map", network_map.as_deref())?,
                    storage_mappings: StorageMappings::from_args(
                        default_storage_backend,
                        &storage_backend_mappings,
                        &disk_storage_mappings,
                    )?,
                    notes,
                };

                let execution = client.update_replica(&id, &patch, force).await?;
                print_table(&ExecutionDetailFormatter.detail_table(&execution));
            }

            ReplicaCommands::Delete { id } => {
                client.delete_replica(&id).await?;
            }

            ReplicaCommands::DeleteDisks { id } => {
                let execution = client.delete_replica_disks(&id).await?;
                print_table(&ExecutionDetailFormatter.detail_table(&execution));
            }
        },

        // Endpoint commands
        Commands::Endpoint { action } => match action {
            EndpointCommands::Create {
                name,
                endpoint_type,
                connection_info,
                description,
            } => {
                let connection_info = parse_json_arg("connection-info", &connection_info)?;
                let endpoint = client
                    .create_endpoint(
                        &name,
                        &endpoint_type,
                        &connection_info,
                        description.as_deref(),
                    )
                    .await?;
                print_table(&EndpointDetailFormatter.detail_table(&endpoint));
            }

            EndpointCommands::Show { endpoint } => {
                let endpoint = client.get_endpoint(&endpoint).await?;
                print_table(&EndpointDetailFormatter.detail_table(&endpoint));
            }

            EndpointCommands::List => {
                let endpoints = client.list_endpoints().await?;
                print_table(&EndpointFormatter.list_table(&endpoints));
            }

            EndpointCommands::Update {
                endpoint,
                name,
                description,
                connection_info,
            } => {
                let patch = EndpointUpdate {
                    name,
                    description,
                    connection_info: parse_opt_json_arg(
                        "connection-info",
                        connection_info.as_deref(),
                    )?,
                };
                let endpoint = client.update_endpoint(&endpoint, &patch).await?;
                print_table(&EndpointDetailFormatter.detail_table(&endpoint));
            }

            EndpointCommands::Delete { endpoint } => {
                client.delete_endpoint(&endpoint).await?;
            }

            EndpointCommands::Validate { endpoint } => {
                let (valid, message) = client.validate_endpoint(&endpoint).await?;
                if !valid {
                    eprintln!("Endpoint validation failed: {}", message);
                    return Ok(ExitCode::FAILURE);
                }
                println!("Endpoint connection is valid.");
            }
        },

        // Provider commands
        Commands::Provider { action } => match action {
            ProviderCommands::List => {
                let providers = client.list_providers().await?;
                let rows = providers.keys().map(|name| vec![name.clone()]).collect();
                print_table(&Table::new(vec!["Platform".to_string()], rows));
            }

            ProviderCommands::Schema { platform, category } => {
                let category = SchemaCategory::from_str(&category)?;
                let schema = client.schemas(&platform, category).await?;
                match serde_json::to_string_pretty(&schema) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing schema: {}", e);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn print_table(table: &Table) {
    print!("{}", table);
}

/// Decode a JSON-valued CLI flag, failing before any network call
fn parse_json_arg(flag: &str, raw: &str) -> ClientResult<Value> {
    serde_json::from_str(raw)
        .map_err(|e| ClientError::validation(format!("invalid JSON in --{}: {}", flag, e)))
}

fn parse_opt_json_arg(flag: &str, raw: Option<&str>) -> ClientResult<Option<Value>> {
    raw.map(|r| parse_json_arg(flag, r)).transpose()
}

/// Print guidance when no service URL could be discovered.
fn missing_server_exit() -> ExitCode {
    let config_path = Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "config.toml".to_string());

    eprintln!("Error: No service URL configured.");
    eprintln!();
    eprintln!("Specify one with --server, the CARAVEL_API_URL environment variable,");
    eprintln!("or api.url in {}:", config_path);
    eprintln!();
    eprintln!("  [api]");
    eprintln!("  url = \"https://migration.example.com\"");
    ExitCode::FAILURE
}
