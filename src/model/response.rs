use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by `POST /issue-token`.
///
/// Fields the backend adds beyond the known ones are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueTokenResponse {
    /// Address of the issuing account: `issuer_address`, else `sender`, else `""`.
    ///
    /// Empty strings count as absent.
    pub fn issuer(&self) -> &str {
        [&self.issuer_address, &self.sender]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// Body returned by `POST /transfer-admin` and `POST /clear-admin`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Builds the full denom of a token class: `{subunit}-{issuer}`.
pub fn derive_denom(subunit: &str, issuer: &str) -> String {
    format!("{subunit}-{issuer}")
}
