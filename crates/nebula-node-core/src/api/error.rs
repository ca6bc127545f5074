use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The remote call an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Authenticate,
    CreateNode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Authenticate => f.write_str("authentication"),
            Operation::CreateNode => f.write_str("node creation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error during {operation}: {source}")]
    Network {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} failed with status {status}: {body}")]
    Status {
        operation: Operation,
        status: StatusCode,
        body: String,
    },

    #[error("Invalid {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn network(operation: Operation, source: reqwest::Error) -> Self {
        ApiError::Network { operation, source }
    }

    /// The body is kept verbatim so operators can read the server's own
    /// explanation of the failure.
    pub fn from_status(operation: Operation, status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            operation,
            status,
            body: body.to_string(),
        }
    }

    pub fn decode(operation: Operation, source: serde_json::Error) -> Self {
        ApiError::Decode { operation, source }
    }

    /// HTTP status of the response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
