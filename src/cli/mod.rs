use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `appstate` - drive the application stores against a live backend.
#[derive(Parser, Debug)]
#[command(name = "appstate")]
#[command(version)]
#[command(about = "Bootstrap application state from a backend and print it.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.appstate/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend root URL, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Initialize the application (loads the user profile when authenticated)
    Init,
    /// Fetch the health-check payload
    Ping,
    /// Fetch the public server configuration
    ServerConfig,
    /// Run init, ping and server-config in order
    Bootstrap,
}
