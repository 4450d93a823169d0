use serde::{Deserialize, Serialize};

/// One directory entry, keyed by national identity reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub identity_ref: String,
    pub firstname: String,
    pub lastname: String,
    /// Login name of the backing user account, when one exists.
    #[serde(default)]
    pub username: Option<String>,
}

/// Mutable fields for an update; the identity reference is the address, not
/// part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub username: Option<String>,
}
