//! nebula-node-creator - create a node in a Nebula VPN organization.
//!
//! Logs in to the management API, creates the node and saves the returned
//! descriptor (certificates, overlay address, API key) as JSON.

mod cli;
mod prompt;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use nebula_node_core::input::{Interactive, Preset, Prompter};
use nebula_node_core::{ApiClient, Config, Logging, NodeCreateRequest, Outcome, Workflow};

use cli::{Cli, Commands};
use prompt::TerminalPrompter;

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // One thread is enough: every step waits on the previous one
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(outcome) => {
            println!("Node created and info saved successfully!");
            println!("  id:        {}", outcome.node.id);
            println!("  nebula ip: {}", outcome.node.network_address);
            println!("  saved to:  {}", outcome.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    let logging = Logging::new(cli.debug);

    let mut config = Config::from_env()?;
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }

    tracing::dispatcher::with_default(logging.dispatch(), || {
        debug!(
            base_url = %config.api.base_url,
            output = %config.output_base_dir.display(),
            layout = %config.layout,
            "Configuration loaded"
        );
    });

    let mut source = input_source(cli.command, &config, TerminalPrompter);

    let client = ApiClient::new(&config.api.base_url)?;
    let workflow = Workflow::new(client, config, logging);
    Ok(workflow.run(&mut source).await?)
}

/// Flags and configuration answer first; the prompter covers the rest.
fn input_source<P: Prompter>(
    command: Option<Commands>,
    config: &Config,
    prompter: P,
) -> Preset<Interactive<P>> {
    let mut organization = config.organization_name.clone();
    let mut node = None;
    if let Some(Commands::Create(args)) = command {
        organization = args.org.or(organization);
        node = Some(NodeCreateRequest::new(args.name, args.hostname));
    }

    Preset::new(Interactive::new(prompter))
        .with_credentials(config.credentials())
        .with_organization(organization)
        .with_node(node)
}
