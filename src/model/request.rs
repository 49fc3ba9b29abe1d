use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Decimal precision used for a new token class unless the user changes it.
pub const DEFAULT_PRECISION: u32 = 6;

/// The three forms the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Issue a new fungible token class.
    #[default]
    IssueToken,
    /// Hand the admin rights of a denom to another account.
    TransferAdmin,
    /// Drop the admin of a denom entirely.
    ClearAdmin,
}

impl Section {
    /// All sections in tab order.
    pub const ALL: [Section; 3] = [Self::IssueToken, Self::TransferAdmin, Self::ClearAdmin];

    /// Human-readable label used for tabs and titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::IssueToken => "Issue Class",
            Self::TransferAdmin => "Transfer Admin",
            Self::ClearAdmin => "Clear Admin",
        }
    }

    /// Prefix of the error notification raised when a submit fails.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::IssueToken => "Error issuing class",
            Self::TransferAdmin => "Error transferring admin rights",
            Self::ClearAdmin => "Error clearing admin rights",
        }
    }

    /// The next section, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::IssueToken => Self::TransferAdmin,
            Self::TransferAdmin => Self::ClearAdmin,
            Self::ClearAdmin => Self::IssueToken,
        }
    }

    /// The previous section, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::IssueToken => Self::ClearAdmin,
            Self::TransferAdmin => Self::IssueToken,
            Self::ClearAdmin => Self::TransferAdmin,
        }
    }
}

/// Body of `POST /issue-token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassIssuanceRequest {
    pub symbol: String,
    pub subunit: String,
    pub precision: u32,
    /// Kept as text: amounts can exceed any native integer width.
    pub initial_amount: String,
    pub description: String,
}

impl Default for ClassIssuanceRequest {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            subunit: String::new(),
            precision: DEFAULT_PRECISION,
            initial_amount: String::new(),
            description: String::new(),
        }
    }
}

/// Body of `POST /transfer-admin`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminTransferRequest {
    pub denom: String,
    pub new_admin: String,
}

/// Body of `POST /clear-admin`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminClearRequest {
    pub denom: String,
}

/// Fields of [`ClassIssuanceRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    Symbol,
    Subunit,
    Precision,
    InitialAmount,
    Description,
}

/// Fields of [`AdminTransferRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferField {
    Denom,
    NewAdmin,
}

/// Fields of [`AdminClearRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearField {
    Denom,
}

/// Identifies one field of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Issue(IssueField),
    Transfer(TransferField),
    Clear(ClearField),
}

impl FieldKey {
    /// Wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Issue(IssueField::Symbol) => "symbol",
            Self::Issue(IssueField::Subunit) => "subunit",
            Self::Issue(IssueField::Precision) => "precision",
            Self::Issue(IssueField::InitialAmount) => "initial_amount",
            Self::Issue(IssueField::Description) => "description",
            Self::Transfer(TransferField::Denom) | Self::Clear(ClearField::Denom) => "denom",
            Self::Transfer(TransferField::NewAdmin) => "new_admin",
        }
    }
}

/// A new value for a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
}

impl FieldValue {
    fn into_text(self, key: FieldKey) -> Result<String, ValidationError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Number(_) => Err(ValidationError::WrongFieldKind { field: key.name() }),
        }
    }

    fn into_number(self, key: FieldKey) -> Result<u32, ValidationError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(_) => Err(ValidationError::WrongFieldKind { field: key.name() }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl ClassIssuanceRequest {
    /// Overwrites a single field. The record is untouched on error.
    pub fn set(&mut self, field: IssueField, value: FieldValue) -> Result<(), ValidationError> {
        let key = FieldKey::Issue(field);
        match field {
            IssueField::Precision => self.precision = value.into_number(key)?,
            IssueField::Symbol => self.symbol = value.into_text(key)?,
            IssueField::Subunit => self.subunit = value.into_text(key)?,
            IssueField::InitialAmount => self.initial_amount = value.into_text(key)?,
            IssueField::Description => self.description = value.into_text(key)?,
        }
        Ok(())
    }
}

impl AdminTransferRequest {
    /// Overwrites a single field. The record is untouched on error.
    pub fn set(&mut self, field: TransferField, value: FieldValue) -> Result<(), ValidationError> {
        let text = value.into_text(FieldKey::Transfer(field))?;
        match field {
            TransferField::Denom => self.denom = text,
            TransferField::NewAdmin => self.new_admin = text,
        }
        Ok(())
    }
}

impl AdminClearRequest {
    /// Overwrites a single field. The record is untouched on error.
    pub fn set(&mut self, field: ClearField, value: FieldValue) -> Result<(), ValidationError> {
        let text = value.into_text(FieldKey::Clear(field))?;
        match field {
            ClearField::Denom => self.denom = text,
        }
        Ok(())
    }
}
