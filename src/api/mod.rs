//! HTTP client for the token management backend.

mod client;
mod error;

use std::future::Future;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;

use crate::model::{
    AdminClearRequest, AdminResponse, AdminTransferRequest, ClassIssuanceRequest,
    IssueTokenResponse,
};

/// The three backend operations, one round trip each.
///
/// Implementations must not retry and must return backend failures rather
/// than swallowing them.
pub trait TokenApi {
    /// `POST /issue-token`
    fn issue_token(
        &self,
        request: &ClassIssuanceRequest,
    ) -> impl Future<Output = Result<IssueTokenResponse, ApiError>>;

    /// `POST /transfer-admin`
    fn transfer_admin(
        &self,
        request: &AdminTransferRequest,
    ) -> impl Future<Output = Result<AdminResponse, ApiError>>;

    /// `POST /clear-admin`
    fn clear_admin(
        &self,
        request: &AdminClearRequest,
    ) -> impl Future<Output = Result<AdminResponse, ApiError>>;
}
