mod notification;
mod request;
mod response;
mod validation;

pub use notification::{Level, Notification};
pub use request::{
    AdminClearRequest, AdminTransferRequest, ClassIssuanceRequest, ClearField, DEFAULT_PRECISION,
    FieldKey, FieldValue, IssueField, Section, TransferField,
};
pub use response::{AdminResponse, IssueTokenResponse, derive_denom};
pub use validation::{ValidationError, parse_precision, validate_denom};
