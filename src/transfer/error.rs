//! Transfer error types.

use thiserror::Error;

/// Submit-time validation failures, in the order they are checked. Exactly
/// one is reported per submit: the first rule violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("source account identifier is required")]
    MissingSource,

    #[error("destination account identifier is required")]
    MissingDestination,

    #[error("amount must be a positive value")]
    NonPositiveAmount,

    #[error("source and destination accounts must differ")]
    SameAccount,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingSource => "SOURCE_REQUIRED",
            ValidationError::MissingDestination => "DESTINATION_REQUIRED",
            ValidationError::NonPositiveAmount => "INVALID_AMOUNT",
            ValidationError::SameAccount => "SAME_ACCOUNT",
        }
    }
}

/// Workflow-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Entry guard: the session lacks the teller flag
    #[error("only teller agents can initiate transfers")]
    Restricted,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The execution service rejected the transfer; carries the message
    /// surfaced to the user
    #[error("{0}")]
    Execution(String),
}

impl TransferError {
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::Restricted => "RESTRICTED",
            TransferError::Validation(e) => e.code(),
            TransferError::Execution(_) => "EXECUTION_FAILED",
        }
    }
}

/// Transport-level failure of the execution call itself: the backend never
/// produced a usable verdict. Distinct from a rejected transfer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transfer service unreachable: {0}")]
pub struct ExecutionError(pub String);

impl From<reqwest::Error> for ExecutionError {
    fn from(e: reqwest::Error) -> Self {
        ExecutionError(e.to_string())
    }
}
