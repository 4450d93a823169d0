//! Guarded wire-transfer workflow.
//!
//! A finite state machine governing data entry, validation, human
//! confirmation and submission of one funds transfer. Instances are
//! independent and short-lived: one per in-progress attempt.
//!
//! # State Machine
//!
//! ```text
//! DRAFT ──submit/valid──▶ AWAITING_CONFIRMATION ──confirm──▶ SUBMITTING
//!   ▲  ◀──────cancel─────────────┘                               │
//!   │                                             success        │ failure
//!   │◀──edit── SUCCEEDED ◀───────────────────────────────┐       ▼
//!   │◀──edit── FAILED ◀──────────────────────────────────┴── (outcome)
//! ```
//!
//! # Invariants
//!
//! 1. Only `is_teller` sessions can enter the workflow at all
//! 2. A request leaves `Draft` only when all four validation rules pass
//! 3. At most one execution call is in flight per instance; confirm is a
//!    no-op while `Submitting` even if the UI affordance is bypassed
//! 4. Outcomes are matched to their attempt; a superseded response is
//!    dropped instead of mutating a newer attempt's state

pub mod error;
pub mod executor;
pub mod state;
pub mod types;
pub mod workflow;


pub use error::{ExecutionError, TransferError, ValidationError};
pub use executor::{HttpTransferExecutor, MockTransferExecutor, TransferExecutor};
pub use state::TransferState;
pub use types::{ConfirmationSummary, ExecutionOutcome, TransferDraft, TransferRequest, validate};
pub use workflow::{Field, Notice, Submission, TransferWorkflow};
