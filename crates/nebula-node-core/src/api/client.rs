//! API client for the Nebula management service.
//!
//! Two calls are supported: obtaining a bearer token and creating a node
//! inside an organization. Neither call is retried.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{LoginRequest, NodeCreateRequest, NodeRecord, TokenResponse};

use super::error::{ApiError, Operation};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// Exceeding it surfaces as a network error for the call in flight.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token endpoint, relative to the base URL.
const TOKEN_PATH: &str = "/api/token/";

/// API client for the Nebula management service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange an email/password pair for an access token
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<String, ApiError> {
        let op = Operation::Authenticate;
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        debug!(url = %url, "Requesting access token");

        let body = LoginRequest {
            email: identifier,
            password: secret,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::network(op, e))?;

        let token: TokenResponse = Self::decode(op, StatusCode::OK, response).await?;
        Ok(token.access)
    }

    /// Create a node in `organization`, returning the record assigned by the server
    pub async fn create_node(
        &self,
        token: &str,
        organization: &str,
        request: &NodeCreateRequest,
    ) -> Result<NodeRecord, ApiError> {
        let op = Operation::CreateNode;
        let url = self.nodes_url(organization);
        debug!(url = %url, name = %request.name, "Creating node");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::network(op, e))?;

        Self::decode(op, StatusCode::CREATED, response).await
    }

    fn nodes_url(&self, organization: &str) -> String {
        format!("{}/api/organizations/{}/nodes/", self.base_url, organization)
    }

    /// Accept only `expected`; anything else becomes an error carrying the body.
    async fn decode<T: DeserializeOwned>(
        op: Operation,
        expected: StatusCode,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(op, e))?;

        if status != expected {
            return Err(ApiError::from_status(op, status, &text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::decode(op, e))
    }
}
