use thiserror::Error;

/// Client-side validation failures. None of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide a valid denom to clear admin rights.")]
    EmptyDenom,
    #[error("{field} does not accept that kind of value")]
    WrongFieldKind { field: &'static str },
    #[error("precision must be a whole number: {0:?}")]
    InvalidPrecision(String),
}

/// Validates a denom: must contain something other than whitespace.
pub fn validate_denom(denom: &str) -> Result<(), ValidationError> {
    if denom.trim().is_empty() {
        Err(ValidationError::EmptyDenom)
    } else {
        Ok(())
    }
}

/// Parses the precision field text.
pub fn parse_precision(text: &str) -> Result<u32, ValidationError> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrecision(text.to_string()))
}
