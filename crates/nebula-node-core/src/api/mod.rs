//! REST API client module for the Nebula management service.
//!
//! The service issues JWT bearer tokens from `/api/token/`; the token is
//! then attached to the node creation call.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, Operation};
