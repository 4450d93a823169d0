//! Feature flag derivation.
//!
//! The single place where permission tokens become UI-facing capability
//! flags. Components consume [`FeatureFlags`]; nothing outside this module
//! re-reads raw roles.

use crate::roles::PermissionSet;

pub const CLIENT: &str = "CLIENT";
pub const TELLER: &str = "TELLER";
pub const TELLER_READ_ONLY: &str = "TELLER_READ_ONLY";

// List permissions as the backend spells them (CUSTUMERS is the backend's
// own spelling; it is the literal token on the wire).
pub const GET_ALL_CUSTOMERS: &str = "GET_ALL_CUSTUMERS";
pub const GET_ALL_BANK_ACCOUNTS: &str = "GET_ALL_BANK_ACCOUNT";

/// Capability flags for one session. Pure function of the permission set and
/// username; recomputed on demand, never stored durably.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub is_client: bool,
    pub is_teller: bool,
    pub is_teller_read_only: bool,
}

impl FeatureFlags {
    /// Teller-only surfaces: identifier search, owner-name column.
    pub fn can_browse_accounts(&self) -> bool {
        self.is_teller || self.is_teller_read_only
    }
}

/// Derive the flags for a session.
///
/// Blanket override: the literal username `admin` is granted every flag
/// regardless of the authorities its token carries, for parity with the
/// backend's bootstrap admin account. Username matching is a weaker trust
/// model than authority checks; do not extend the override to new flags.
pub fn derive_flags(permissions: &PermissionSet, username: &str) -> FeatureFlags {
    let admin = username == "admin";
    FeatureFlags {
        is_client: admin || permissions.contains(CLIENT),
        is_teller: admin || permissions.contains(TELLER),
        is_teller_read_only: admin || permissions.contains(TELLER_READ_ONLY),
    }
}

/// Membership checks for the list permissions the dashboard counters use.
pub fn can_list_customers(permissions: &PermissionSet) -> bool {
    permissions.contains(GET_ALL_CUSTOMERS)
}

pub fn can_list_accounts(permissions: &PermissionSet) -> bool {
    permissions.contains(GET_ALL_BANK_ACCOUNTS)
}
