use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProviderCommands {
    /// List platform providers installed server-side
    List,

    /// Fetch the JSON Schema a platform expects for a parameter category
    Schema {
        /// Platform type (e.g. openstack, oci, azure)
        platform: String,

        /// Schema category
        #[arg(value_parser = ["connection", "source", "destination"])]
        category: String,
    },
}
