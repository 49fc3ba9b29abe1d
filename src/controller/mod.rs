//! Form state and submit handling, independent of any rendering.
//!
//! The controller owns one record per form, dispatches the matching
//! [`TokenApi`] call on submit and turns every outcome into a
//! [`Notification`]. Field state is never touched by a submit, so a failed
//! request can be corrected and resent.

mod error;

use tracing::{info, warn};

pub use error::SubmitError;

use crate::api::TokenApi;
use crate::model::{
    AdminClearRequest, AdminResponse, AdminTransferRequest, ClassIssuanceRequest, FieldKey,
    FieldValue, IssueTokenResponse, Notification, Section, ValidationError, derive_denom,
    validate_denom,
};
use crate::storage::{KeyValueStore, LAST_ISSUED_DENOM, StorageError};

/// Oldest notifications are dropped beyond this many.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A token class was issued; `denom` is the derived full denom.
    Issued {
        response: IssueTokenResponse,
        denom: String,
    },
    AdminTransferred(AdminResponse),
    AdminCleared(AdminResponse),
}

impl SubmitOutcome {
    /// Transaction hash reported by the backend.
    pub fn transaction_id(&self) -> &str {
        match self {
            Self::Issued { response, .. } => &response.transaction_id,
            Self::AdminTransferred(r) | Self::AdminCleared(r) => &r.transaction_id,
        }
    }
}

/// Holds the three form records and performs submits against `A`,
/// persisting into `S`.
pub struct FormController<A, S> {
    api: A,
    store: S,
    active: Section,
    issue: ClassIssuanceRequest,
    transfer: AdminTransferRequest,
    clear: AdminClearRequest,
    notifications: Vec<Notification>,
}

impl<A: TokenApi, S: KeyValueStore> FormController<A, S> {
    /// Creates a controller with empty forms and the issue section active.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            active: Section::default(),
            issue: ClassIssuanceRequest::default(),
            transfer: AdminTransferRequest::default(),
            clear: AdminClearRequest::default(),
            notifications: Vec::new(),
        }
    }

    /// Returns the section currently shown.
    pub fn active_section(&self) -> Section {
        self.active
    }

    /// Makes `section` active. No record is cleared.
    pub fn select_section(&mut self, section: Section) {
        self.active = section;
    }

    pub fn issue_request(&self) -> &ClassIssuanceRequest {
        &self.issue
    }

    pub fn transfer_request(&self) -> &AdminTransferRequest {
        &self.transfer
    }

    pub fn clear_request(&self) -> &AdminClearRequest {
        &self.clear
    }

    /// Overwrites one field of one record; everything else is unchanged.
    pub fn update_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), ValidationError> {
        match key {
            FieldKey::Issue(field) => self.issue.set(field, value),
            FieldKey::Transfer(field) => self.transfer.set(field, value),
            FieldKey::Clear(field) => self.clear.set(field, value),
        }
    }

    /// All notifications emitted so far, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drops every notification.
    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Denom of the most recently issued class, as persisted.
    pub fn last_issued_denom(&self) -> Result<Option<String>, StorageError> {
        self.store.get(LAST_ISSUED_DENOM)
    }

    /// Copies the last issued denom into the transfer and clear forms where
    /// their denom is still empty. Returns `true` if any record changed.
    pub fn prefill_denoms(&mut self) -> Result<bool, StorageError> {
        let Some(denom) = self.last_issued_denom()? else {
            return Ok(false);
        };
        let mut changed = false;
        if self.transfer.denom.is_empty() {
            self.transfer.denom = denom.clone();
            changed = true;
        }
        if self.clear.denom.is_empty() {
            self.clear.denom = denom;
            changed = true;
        }
        Ok(changed)
    }

    /// Submits the record of `section`.
    ///
    /// Every call emits notifications: success (and, for issuance, info) on
    /// success, exactly one error otherwise. The error is also returned.
    pub async fn submit(&mut self, section: Section) -> Result<SubmitOutcome, SubmitError> {
        let result = match section {
            Section::IssueToken => self.submit_issue().await,
            Section::TransferAdmin => self.submit_transfer().await,
            Section::ClearAdmin => self.submit_clear().await,
        };

        match &result {
            Ok(outcome) => info!(?section, tx = outcome.transaction_id(), "submit succeeded"),
            // The transaction went through; only the denom was lost.
            Err(SubmitError::Storage(e)) => {
                warn!(?section, error = %e, "issued but could not store denom");
                self.notify(Notification::error(format!(
                    "Issued, but could not save denom: {e}"
                )));
            }
            Err(e) => {
                warn!(?section, error = %e, "submit failed");
                self.notify(Notification::error(format!(
                    "{}: {}",
                    section.failure_prefix(),
                    e.detail()
                )));
            }
        }
        result
    }

    /// Submits the record of the active section.
    pub async fn submit_active(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.submit(self.active).await
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn submit_issue(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let response = self.api.issue_token(&self.issue).await?;
        let denom = derive_denom(&self.issue.subunit, response.issuer());

        self.notify(Notification::success(format!(
            "Transaction Successful! TxHash: {}",
            response.transaction_id
        )));
        self.notify(Notification::info(format!("Token issued with denom: {denom}")));

        self.store.set(LAST_ISSUED_DENOM, &denom)?;
        info!(%denom, "stored last issued denom");

        Ok(SubmitOutcome::Issued { response, denom })
    }

    async fn submit_transfer(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let response = self.api.transfer_admin(&self.transfer).await?;
        self.notify(Notification::success(format!(
            "Admin Transferred! TxHash: {}",
            response.transaction_id
        )));
        Ok(SubmitOutcome::AdminTransferred(response))
    }

    async fn submit_clear(&mut self) -> Result<SubmitOutcome, SubmitError> {
        validate_denom(&self.clear.denom)?;
        let response = self.api.clear_admin(&self.clear).await?;
        self.notify(Notification::success(format!(
            "Admin Rights Cleared! TxHash: {}",
            response.transaction_id
        )));
        Ok(SubmitOutcome::AdminCleared(response))
    }

    fn notify(&mut self, notification: Notification) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            let excess = self.notifications.len() + 1 - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
        self.notifications.push(notification);
    }
}
