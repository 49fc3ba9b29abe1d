use crate::api::ApiError;
use crate::model::ValidationError;
use crate::storage::StorageError;

/// Why a submit did not complete.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The record failed a client-side check; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend call succeeded but the result could not be persisted.
    #[error("could not save issued denom: {0}")]
    Storage(#[from] StorageError),
}

impl SubmitError {
    /// Text shown to the user: the backend payload when there is one,
    /// otherwise the error message itself.
    pub fn detail(&self) -> String {
        match self {
            Self::Api(e) => e.payload().map_or_else(|| e.to_string(), str::to_string),
            other => other.to_string(),
        }
    }
}
