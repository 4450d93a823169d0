//! Customer directory client.
//!
//! Teller-facing CRUD against the gateway's customer directory, addressed by
//! identity reference. Shares the lookup error taxonomy with account
//! queries; gating by [`crate::policy::FeatureFlags`] stays the caller's
//! concern, as with account search.

pub mod models;
pub mod service;

pub use models::{CustomerRecord, CustomerUpdate};
pub use service::{CustomerService, HttpCustomerService, MockCustomerService};
