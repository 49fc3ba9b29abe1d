use std::error::Error as _;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ApiError, TokenApi};
use crate::model::{
    AdminClearRequest, AdminResponse, AdminTransferRequest, ClassIssuanceRequest,
    IssueTokenResponse,
};

/// Base URL of a backend running locally.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const ISSUE_TOKEN: &str = "issue-token";
const TRANSFER_ADMIN: &str = "transfer-admin";
const CLEAR_ADMIN: &str = "clear-admin";

/// [`TokenApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the backend rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            http: reqwest::Client::new(),
        })
    }

    /// Returns the base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn post<B, R>(&self, endpoint: &'static str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "sending request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "request failed");
                ApiError::Transport {
                    endpoint,
                    reason: error_chain(&e),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), %body, "backend returned an error");
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| ApiError::Decode {
            endpoint,
            reason: error_chain(&e),
        })
    }
}

/// Flattens an error and its sources into one line.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl TokenApi for ApiClient {
    async fn issue_token(
        &self,
        request: &ClassIssuanceRequest,
    ) -> Result<IssueTokenResponse, ApiError> {
        let response: IssueTokenResponse = self.post(ISSUE_TOKEN, request).await?;
        debug!(denom = ?response.denom, tx = %response.transaction_id, "token class issued");
        Ok(response)
    }

    async fn transfer_admin(
        &self,
        request: &AdminTransferRequest,
    ) -> Result<AdminResponse, ApiError> {
        self.post(TRANSFER_ADMIN, request).await
    }

    async fn clear_admin(&self, request: &AdminClearRequest) -> Result<AdminResponse, ApiError> {
        debug!(denom = %request.denom, "clearing admin");
        self.post(CLEAR_ADMIN, request).await
    }
}
