//! Lookup error taxonomy, shared with the customer directory client.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The backend reported no match. Not a system fault.
    #[error("account not found")]
    NotFound,

    /// The backend answered with a failure status.
    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },

    /// The request never produced a usable answer (network, timeout,
    /// unparseable body).
    #[error("lookup failed: {0}")]
    Transport(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }

    /// Copy surfaced to the end user. `NotFound` stays neutral; backend
    /// failures keep the backend's own message, with a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::NotFound => "account not found".to_string(),
            LookupError::Backend { message, .. } if !message.is_empty() => message.clone(),
            _ => "lookup failed".to_string(),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}
