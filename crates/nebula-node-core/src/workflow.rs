//! Node creation workflow.
//!
//! ```text
//! start -> collect-credentials -> authenticate -> collect-node-fields
//!       -> create-node -> persist -> done
//! ```
//!
//! Every step either succeeds or ends the run with a [`WorkflowError`].
//! Nothing is retried and nothing is written unless both API calls succeed.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::instrument::WithSubscriber;
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::input::{CredentialSource, InputError, NodeFieldSource};
use crate::logging::Logging;
use crate::models::NodeRecord;
use crate::storage::{self, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CollectCredentials,
    Authenticate,
    CollectNodeFields,
    CreateNode,
    Persist,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CollectCredentials => "collect credentials",
            Step::Authenticate => "authenticate",
            Step::CollectNodeFields => "collect node fields",
            Step::CreateNode => "create node",
            Step::Persist => "save node information",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to {step}: {source}")]
    Input {
        step: Step,
        #[source]
        source: InputError,
    },

    #[error("Failed to login: {0}")]
    Authenticate(#[source] ApiError),

    #[error("Failed to create node: {0}")]
    CreateNode(#[source] ApiError),

    #[error("Failed to save node information: {0}")]
    Persist(#[from] StorageError),
}

impl WorkflowError {
    /// The step the run stopped at
    pub fn step(&self) -> Step {
        match self {
            WorkflowError::Input { step, .. } => *step,
            WorkflowError::Authenticate(_) => Step::Authenticate,
            WorkflowError::CreateNode(_) => Step::CreateNode,
            WorkflowError::Persist(_) => Step::Persist,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub node: NodeRecord,
    pub path: PathBuf,
}

pub struct Workflow {
    client: ApiClient,
    config: Config,
    logging: Logging,
}

impl Workflow {
    pub fn new(client: ApiClient, config: Config, logging: Logging) -> Self {
        Self {
            client,
            config,
            logging,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every step once, in order, under this workflow's logger.
    pub async fn run<S>(&self, source: &mut S) -> Result<Outcome, WorkflowError>
    where
        S: CredentialSource + NodeFieldSource,
    {
        let dispatch = self.logging.dispatch().clone();
        self.steps(source).with_subscriber(dispatch).await
    }

    async fn steps<S>(&self, source: &mut S) -> Result<Outcome, WorkflowError>
    where
        S: CredentialSource + NodeFieldSource,
    {
        let credentials = source.credentials().map_err(|e| WorkflowError::Input {
            step: Step::CollectCredentials,
            source: e,
        })?;

        info!(base_url = %self.client.base_url(), user = %credentials.identifier, "Authenticating");
        let token = self
            .client
            .authenticate(&credentials.identifier, &credentials.secret)
            .await
            .map_err(WorkflowError::Authenticate)?;
        drop(credentials);
        debug!("Access token received");

        let input_err = |e| WorkflowError::Input {
            step: Step::CollectNodeFields,
            source: e,
        };
        let organization = source.organization().map_err(input_err)?;
        let request = source.node_request().map_err(input_err)?;

        info!(organization = %organization, name = %request.name, hostname = %request.hostname, "Creating node");
        let node = self
            .client
            .create_node(&token, &organization, &request)
            .await
            .map_err(WorkflowError::CreateNode)?;
        debug!(node_id = %node.id, nebula_ip = %node.network_address, "Node created");

        let dir = self.config.node_dir(&organization, &node.id);
        let path = storage::save(&node, &dir)?;

        info!(node_id = %node.id, path = %path.display(), "Node created successfully");
        Ok(Outcome { node, path })
    }
}
