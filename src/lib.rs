//! IR Bank console client
//!
//! A client for the bank's multi-connector REST gateway. The interesting
//! parts are the session role resolution and the guarded transfer workflow;
//! the rest is plumbing around them.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`session`] - session blob, raw role payload, session provider seam
//! - [`roles`] - role payload → permission set resolution
//! - [`policy`] - permission set → feature flags
//! - [`money`] - amount parsing and EUR display formatting
//! - [`client`] - shared HTTP plumbing with bearer injection
//! - [`accounts`] - account list and RIB search
//! - [`customers`] - customer directory CRUD
//! - [`transfer`] - the guarded wire-transfer state machine

pub mod accounts;
pub mod client;
pub mod config;
pub mod customers;
pub mod logging;
pub mod money;
pub mod policy;
pub mod roles;
pub mod session;
pub mod transfer;

// Convenient re-exports at crate root
pub use accounts::{AccountLookup, AccountRecord, AccountService, LookupError};
pub use client::ApiClient;
pub use config::AppConfig;
pub use customers::{CustomerRecord, CustomerService};
pub use policy::{FeatureFlags, derive_flags};
pub use roles::{PermissionSet, resolve};
pub use session::{FileSessionStore, RawRoles, Session, SessionProvider};
pub use transfer::{
    TransferError, TransferExecutor, TransferRequest, TransferState, TransferWorkflow,
};
