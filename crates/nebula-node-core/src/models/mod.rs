//! Data models exchanged with the Nebula management API.
//!
//! - `Credentials`, `LoginRequest`, `TokenResponse`: authentication
//! - `NodeCreateRequest`, `NodeRecord`: node provisioning

pub mod auth;
pub mod node;

pub use auth::{Credentials, LoginRequest, TokenResponse};
pub use node::{NodeCreateRequest, NodeRecord};
