//! The lookup component consumed by account screens.

use super::error::LookupError;
use super::models::AccountRecord;
use super::service::AccountService;
use crate::policy::FeatureFlags;
use std::sync::Arc;
use tracing::debug;

/// Read-only account queries for one session, carrying the flags that gate
/// teller-only surfaces. Flags gate visibility; the queries themselves do
/// not depend on them.
pub struct AccountLookup {
    service: Arc<dyn AccountService>,
    flags: FeatureFlags,
}

impl AccountLookup {
    pub fn new(service: Arc<dyn AccountService>, flags: FeatureFlags) -> Self {
        Self { service, flags }
    }

    /// Whether the identifier-search box may be shown.
    pub fn can_search(&self) -> bool {
        self.flags.can_browse_accounts()
    }

    /// Whether the owner-name column may be shown.
    pub fn show_owner_column(&self) -> bool {
        self.flags.can_browse_accounts()
    }

    /// Available to any signed-in session.
    pub async fn list_all(&self) -> Result<Vec<AccountRecord>, LookupError> {
        self.service.list_all().await
    }

    /// Search by RIB. Blank or whitespace-only input clears the result
    /// without issuing a request; a missing account is an error the caller
    /// renders via [`LookupError::user_message`].
    pub async fn search(&self, identifier: &str) -> Result<Option<AccountRecord>, LookupError> {
        if identifier.trim().is_empty() {
            debug!("Blank search input, clearing result");
            return Ok(None);
        }
        self.service
            .find_by_identifier(identifier)
            .await
            .map(Some)
    }
}
