//! Account lookup.
//!
//! Read-only queries against the bank gateway: the full account list, and
//! single-account search by RIB. Stateless beyond the current query result;
//! nothing is cached across sessions.
//!
//! Teller gating controls which surfaces a caller may expose (identifier
//! search, owner-name column), not whether the queries themselves work.

pub mod error;
pub mod lookup;
pub mod models;
pub mod service;

pub use error::LookupError;
pub use lookup::AccountLookup;
pub use models::AccountRecord;
pub use service::{AccountService, HttpAccountService, MockAccountService};
