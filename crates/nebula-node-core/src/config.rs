//! Application configuration.
//!
//! Configuration is resolved once at startup from environment variables,
//! each of which has a default:
//!
//! | Variable               | Default                 |
//! |------------------------|-------------------------|
//! | `NEBULA_API_URL`       | `http://localhost:8000` |
//! | `NEBULA_API_USERNAME`  | unset (prompted)        |
//! | `NEBULA_API_PASSWORD`  | unset (prompted)        |
//! | `NEBULA_ORG_NAME`      | unset (prompted)        |
//! | `NEBULA_OUTPUT_DIR`    | `nebula`                |
//! | `NEBULA_OUTPUT_LAYOUT` | `organization`          |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Credentials;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_OUTPUT_DIR: &str = "nebula";

const ENV_API_URL: &str = "NEBULA_API_URL";
const ENV_API_USERNAME: &str = "NEBULA_API_USERNAME";
const ENV_API_PASSWORD: &str = "NEBULA_API_PASSWORD";
const ENV_ORG_NAME: &str = "NEBULA_ORG_NAME";
const ENV_OUTPUT_DIR: &str = "NEBULA_OUTPUT_DIR";
const ENV_OUTPUT_LAYOUT: &str = "NEBULA_OUTPUT_LAYOUT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown output layout '{0}' (expected 'organization' or 'node')")]
    InvalidLayout(String),
}

/// Where node files land under the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// `{output}/{organization}/info.json`
    #[default]
    Organization,
    /// `{output}/{organization}/{node_id}/info.json`
    Node,
}

impl FromStr for OutputLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organization" | "org" => Ok(OutputLayout::Organization),
            "node" => Ok(OutputLayout::Node),
            _ => Err(ConfigError::InvalidLayout(s.to_string())),
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLayout::Organization => f.write_str("organization"),
            OutputLayout::Node => f.write_str("node"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    pub organization_name: Option<String>,
    pub output_base_dir: PathBuf,
    pub layout: OutputLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                username: None,
                password: None,
            },
            organization_name: None,
            output_base_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            layout: OutputLayout::default(),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let layout = match get(ENV_OUTPUT_LAYOUT) {
            Some(value) => value.parse()?,
            None => OutputLayout::default(),
        };

        Ok(Self {
            api: ApiConfig {
                base_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                username: get(ENV_API_USERNAME),
                password: get(ENV_API_PASSWORD),
            },
            organization_name: get(ENV_ORG_NAME),
            output_base_dir: get(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            layout,
        })
    }

    /// Credentials, when both halves are configured
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.api.username, &self.api.password) {
            (Some(user), Some(pass)) => Some(Credentials::new(user.clone(), pass.clone())),
            _ => None,
        }
    }

    /// Directory that receives the node file for `organization`
    pub fn node_dir(&self, organization: &str, node_id: &str) -> PathBuf {
        let dir = self.output_base_dir.join(organization);
        match self.layout {
            OutputLayout::Organization => dir,
            OutputLayout::Node => dir.join(node_id),
        }
    }
}
