//! Role resolution.
//!
//! Normalizes the heterogeneous role payload carried by the session token
//! into a canonical permission set. Total: any malformed payload resolves to
//! the empty set, never an error.

use crate::session::RawRoles;
use serde_json::Value;
use std::collections::BTreeSet;

/// Normalized permission tokens; duplicates collapsed, blanks excluded.
pub type PermissionSet = BTreeSet<String>;

/// Resolve a raw role payload into the permission set it grants.
///
/// Accepted shapes, first match wins:
/// 1. a sequence whose elements are strings or `{"authority": ...}` records;
/// 2. a string holding a JSON-encoded sequence of the same;
/// 3. anything else grants nothing.
pub fn resolve(raw: &RawRoles) -> PermissionSet {
    match raw {
        RawRoles::List(items) => collect(items),
        RawRoles::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => collect(&items),
            _ => PermissionSet::new(),
        },
        RawRoles::Absent | RawRoles::Other(_) => PermissionSet::new(),
    }
}

fn collect(items: &[Value]) -> PermissionSet {
    items
        .iter()
        .map(extract)
        .filter(|token| !token.is_empty())
        .collect()
}

/// One element: plain string, or a record carrying `authority`. Records
/// without a usable `authority` (and any other element type) yield an empty
/// token that the caller drops.
fn extract(item: &Value) -> String {
    let token = match item {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("authority").and_then(Value::as_str).unwrap_or(""),
        _ => "",
    };
    token.trim().to_string()
}
