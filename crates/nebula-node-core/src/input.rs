//! Sources for the values the workflow needs from the operator.
//!
//! The workflow asks a [`CredentialSource`] for a login and a
//! [`NodeFieldSource`] for the organization and node fields. Two
//! implementations exist:
//!
//! - [`Interactive`]: asks for every value through a [`Prompter`]
//! - [`Preset`]: answers from values supplied up front (flags, environment)
//!   and defers anything missing to another source

use std::io;

use thiserror::Error;

use crate::models::{Credentials, NodeCreateRequest};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {field}: {source}")]
    Read {
        field: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Line-oriented terminal access.
pub trait Prompter {
    /// Show `label` and read one line of visible input
    fn ask(&mut self, label: &str) -> io::Result<String>;

    /// Show `label` and read one line without echoing it
    fn ask_secret(&mut self, label: &str) -> io::Result<String>;
}

pub trait CredentialSource {
    fn credentials(&mut self) -> Result<Credentials, InputError>;
}

pub trait NodeFieldSource {
    fn organization(&mut self) -> Result<String, InputError>;

    fn node_request(&mut self) -> Result<NodeCreateRequest, InputError>;
}

// ============================================================================
// Interactive
// ============================================================================

/// Asks for every value through a [`Prompter`].
pub struct Interactive<P> {
    prompter: P,
}

impl<P: Prompter> Interactive<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn into_inner(self) -> P {
        self.prompter
    }

    fn text(&mut self, field: &'static str, label: &str) -> Result<String, InputError> {
        let answer = self
            .prompter
            .ask(label)
            .map_err(|source| InputError::Read { field, source })?;
        non_empty(field, answer.trim().to_string())
    }

    // Passwords are taken as typed; only the line ending is dropped.
    fn secret(&mut self, field: &'static str, label: &str) -> Result<String, InputError> {
        let answer = self
            .prompter
            .ask_secret(label)
            .map_err(|source| InputError::Read { field, source })?;
        non_empty(field, answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<P: Prompter> CredentialSource for Interactive<P> {
    fn credentials(&mut self) -> Result<Credentials, InputError> {
        let identifier = self.text("email", "Enter your email:")?;
        let secret = self.secret("password", "Enter your password:")?;
        Ok(Credentials::new(identifier, secret))
    }
}

impl<P: Prompter> NodeFieldSource for Interactive<P> {
    fn organization(&mut self) -> Result<String, InputError> {
        self.text("organization name", "Enter organization name:")
    }

    fn node_request(&mut self) -> Result<NodeCreateRequest, InputError> {
        let name = self.text("node name", "Enter node name:")?;
        let hostname = self.text("node hostname", "Enter node hostname:")?;
        Ok(NodeCreateRequest::new(name, hostname))
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, InputError> {
    if value.is_empty() {
        Err(InputError::Empty { field })
    } else {
        Ok(value)
    }
}

// ============================================================================
// Preset
// ============================================================================

/// Answers from pre-supplied values, deferring to `fallback` for anything
/// not supplied.
pub struct Preset<F> {
    credentials: Option<Credentials>,
    organization: Option<String>,
    node: Option<NodeCreateRequest>,
    fallback: F,
}

impl<F> Preset<F> {
    pub fn new(fallback: F) -> Self {
        Self {
            credentials: None,
            organization: None,
            node: None,
            fallback,
        }
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    pub fn with_node(mut self, node: Option<NodeCreateRequest>) -> Self {
        self.node = node;
        self
    }
}

impl<F: CredentialSource> CredentialSource for Preset<F> {
    fn credentials(&mut self) -> Result<Credentials, InputError> {
        match self.credentials.take() {
            Some(credentials) => Ok(credentials),
            None => self.fallback.credentials(),
        }
    }
}

impl<F: NodeFieldSource> NodeFieldSource for Preset<F> {
    fn organization(&mut self) -> Result<String, InputError> {
        match self.organization.take() {
            Some(org) => non_empty("organization name", org),
            None => self.fallback.organization(),
        }
    }

    fn node_request(&mut self) -> Result<NodeCreateRequest, InputError> {
        match self.node.take() {
            Some(node) => {
                non_empty("node name", node.name.clone())?;
                non_empty("node hostname", node.hostname.clone())?;
                Ok(node)
            }
            None => self.fallback.node_request(),
        }
    }
}
