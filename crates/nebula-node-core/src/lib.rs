//! Core library for nebula-node.
//!
//! Provisions a node in a Nebula overlay network through the management
//! API and keeps the returned descriptor on disk:
//!
//! - `api`: HTTP client for the token and node endpoints
//! - `models`: request/response types
//! - `config`: environment-driven configuration
//! - `input`: where credentials and node fields come from
//! - `storage`: writes the node descriptor as JSON
//! - `logging`: the logger handle the workflow runs under
//! - `workflow`: sequences the steps above

pub mod api;
pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod storage;
pub mod workflow;

pub use api::{ApiClient, ApiError};
pub use config::{Config, OutputLayout};
pub use logging::Logging;
pub use models::{Credentials, NodeCreateRequest, NodeRecord};
pub use workflow::{Outcome, Workflow, WorkflowError};
