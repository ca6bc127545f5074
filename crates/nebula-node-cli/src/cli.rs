//! Command-line argument parsing with clap.

use clap::{Args, Parser, Subcommand};
use nebula_node_core::OutputLayout;

/// Create Nebula nodes.
///
/// A command-line tool for creating and managing Nebula VPN nodes. Run
/// without a subcommand to be asked for everything interactively.
#[derive(Parser, Debug)]
#[command(name = "nebula-node-creator")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output layout: `organization` writes {dir}/{org}/info.json,
    /// `node` writes {dir}/{org}/{node_id}/info.json.
    #[arg(long, global = true, value_name = "LAYOUT")]
    pub layout: Option<OutputLayout>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new node in the specified organization.
    ///
    /// Credentials are taken from NEBULA_API_USERNAME and NEBULA_API_PASSWORD
    /// when set, and prompted for otherwise.
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the node.
    #[arg(long)]
    pub name: String,

    /// Hostname of the node.
    #[arg(long)]
    pub hostname: String,

    /// Organization to create the node in.
    #[arg(long, env = "NEBULA_ORG_NAME")]
    pub org: Option<String>,
}
