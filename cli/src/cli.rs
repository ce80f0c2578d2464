use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apigw")]
#[command(author, version, about = "Command line console for the API gateway management platform")]
pub struct Cli {
    /// Configuration file path (defaults to apigw.toml, then the user config directory)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },

    /// Manage gateways
    Gateways {
        #[clap(subcommand)]
        action: GatewayAction,
    },

    /// Browse the stages of a gateway
    Stages {
        #[clap(subcommand)]
        action: StageAction,
    },

    /// Browse release history and publish resource versions
    Releases {
        #[clap(subcommand)]
        action: ReleaseAction,
    },

    /// Browse plugin bindings of a gateway
    Plugins {
        #[clap(subcommand)]
        action: PluginAction,
    },

    /// Review application permission requests
    Permissions {
        #[clap(subcommand)]
        action: PermissionAction,
    },

    /// Search the access logs of a gateway
    AccessLogs {
        /// Gateway id
        gateway_id: u64,

        /// Stage id to search
        #[clap(short, long)]
        stage: u64,

        /// Free text query
        #[clap(short, long)]
        query: Option<String>,

        /// Size of the time window ending now, in minutes (at most 30 days)
        #[clap(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(i64).range(1..=crate::commands::access_logs::MAX_SINCE_MINUTES)
        )]
        since_minutes: i64,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// Paging options shared by list commands
#[derive(Args, Clone, Debug)]
pub struct PagingArgs {
    /// Page to show, starting at 1
    #[clap(short, long, default_value_t = 1)]
    pub page: u64,

    /// Rows per page (defaults to the configured page size)
    #[clap(short, long)]
    pub limit: Option<u64>,

    /// Load every row in a single request
    #[clap(long, default_value_t = false)]
    pub all: bool,

    /// Browse pages interactively
    #[clap(short, long, default_value_t = false)]
    pub interactive: bool,
}

#[derive(Subcommand)]
pub enum GatewayAction {
    /// List gateways
    List {
        /// Filter by gateway name
        #[clap(short, long)]
        name: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one gateway
    Get {
        id: u64,
    },

    /// Delete a gateway
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[clap(short, long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum StageAction {
    /// List the stages of a gateway
    List {
        gateway_id: u64,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

#[derive(Subcommand)]
pub enum ReleaseAction {
    /// List release history
    List {
        gateway_id: u64,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Release a resource version to a stage
    Publish {
        gateway_id: u64,

        /// Target stage id
        #[clap(long)]
        stage: u64,

        /// Resource version id to release
        #[clap(long)]
        resource_version: u64,

        /// Release comment
        #[clap(long, default_value = "")]
        comment: String,
    },
}

#[derive(Subcommand)]
pub enum PluginAction {
    /// List plugin bindings
    List {
        gateway_id: u64,

        /// Filter by plugin code
        #[clap(long)]
        code: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

#[derive(Subcommand)]
pub enum PermissionAction {
    /// List pending permission requests
    List {
        gateway_id: u64,

        /// Filter by application code
        #[clap(long)]
        app_code: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Approve (or reject) permission requests
    Approve {
        gateway_id: u64,

        /// Comma-separated request ids
        #[clap(long, value_delimiter = ',', required = true)]
        ids: Vec<u64>,

        /// Reject instead of approving
        #[clap(long, default_value_t = false)]
        reject: bool,

        /// Comment shown to the applicant
        #[clap(long, default_value = "")]
        comment: String,
    },
}
