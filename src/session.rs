//! Session payload handed over by the authentication layer.
//!
//! The sign-in flow stores one JSON blob per user (the web build kept it in
//! localStorage; the console build keeps it in a file). Its `roles` field has
//! shipped in several shapes over time: a plain array of strings, an array of
//! `{"authority": ...}` records, a JSON-encoded string of either, or nothing
//! at all. The blob is classified here exactly once; past this module only
//! [`Session`] and the resolved permission set exist.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Role payload exactly as it appears in the session blob. Untrusted.
///
/// Classification is total: every JSON value maps to a variant, so a
/// malformed token can never fail session decoding.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawRoles {
    #[default]
    Absent,
    /// Sequence of strings and/or `{"authority": ...}` records
    List(Vec<Value>),
    /// A string that may itself hold a JSON-encoded sequence
    Text(String),
    /// Any other shape; resolves to no roles
    Other(Value),
}

impl RawRoles {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => RawRoles::Absent,
            Value::Array(items) => RawRoles::List(items),
            Value::String(s) => RawRoles::Text(s),
            other => RawRoles::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for RawRoles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RawRoles::from_value(Value::deserialize(deserializer)?))
    }
}

impl Serialize for RawRoles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawRoles::Absent => serializer.serialize_none(),
            RawRoles::List(items) => items.serialize(serializer),
            RawRoles::Text(s) => serializer.serialize_str(s),
            RawRoles::Other(v) => v.serialize(serializer),
        }
    }
}

/// Signed-in session as stored by the session provider.
///
/// The token is opaque here; issuance and refresh belong to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub username: String,
    #[serde(rename = "jwtToken", alias = "token")]
    pub token: String,
    #[serde(default, rename = "roles")]
    pub raw_roles: RawRoles,
}

/// Source of the current session. Read-only from the client's perspective
/// except for sign-out.
pub trait SessionProvider: Send + Sync {
    fn current_session(&self) -> Option<Session>;
    fn clear_session(&self);
}

/// File-backed store, the console stand-in for the web build's localStorage.
///
/// Unreadable or malformed session files behave as "not signed in".
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionProvider for FileSessionStore {
    fn current_session(&self) -> Option<Session> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), "No session file: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), "Malformed session blob: {}", e);
                None
            }
        }
    }

    fn clear_session(&self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %self.path.display(), "Failed to clear session: {}", e);
        }
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionProvider for MemorySessionStore {
    fn current_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn clear_session(&self) {
        self.session.lock().unwrap().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_roles_classification() {
        assert_eq!(RawRoles::from_value(json!(null)), RawRoles::Absent);
        assert_eq!(
            RawRoles::from_value(json!(["CLIENT"])),
            RawRoles::List(vec![json!("CLIENT")])
        );
        assert_eq!(
            RawRoles::from_value(json!("[\"CLIENT\"]")),
            RawRoles::Text("[\"CLIENT\"]".to_string())
        );
        assert_eq!(
            RawRoles::from_value(json!(42)),
            RawRoles::Other(json!(42))
        );
    }

    #[test]
    fn test_session_decodes_stored_blob() {
        let session: Session = serde_json::from_str(
            r#"{"username":"alice","jwtToken":"tok","roles":[{"authority":"TELLER"}]}"#,
        )
        .unwrap();
        assert_eq!(session.username, "alice");
        assert_eq!(session.token, "tok");
        assert!(matches!(session.raw_roles, RawRoles::List(_)));
    }

    #[test]
    fn test_session_missing_roles_field() {
        let session: Session =
            serde_json::from_str(r#"{"username":"alice","token":"tok"}"#).unwrap();
        assert_eq!(session.raw_roles, RawRoles::Absent);
    }

    #[test]
    fn test_session_roles_wrong_type_still_decodes() {
        let session: Session =
            serde_json::from_str(r#"{"username":"alice","jwtToken":"tok","roles":{"a":1}}"#)
                .unwrap();
        assert!(matches!(session.raw_roles, RawRoles::Other(_)));
    }

    #[test]
    fn test_memory_store_clear() {
        let store = MemorySessionStore::new(Session {
            username: "alice".to_string(),
            token: "tok".to_string(),
            raw_roles: RawRoles::Absent,
        });
        assert!(store.current_session().is_some());
        store.clear_session();
        assert!(store.current_session().is_none());
    }
}
