//! The guarded transfer workflow.
//!
//! One instance per in-progress transfer attempt. All transitions run on
//! `&mut self`, so user input and execution results are serialized by
//! construction; the attempt counter guards against responses that outlive
//! a cancel or re-entry.

use super::error::{ExecutionError, TransferError};
use super::executor::TransferExecutor;
use super::state::TransferState;
use super::types::{
    ConfirmationSummary, ExecutionOutcome, TransferDraft, TransferRequest, validate,
};
use crate::policy::FeatureFlags;
use std::sync::Arc;
use tracing::{debug, info, warn};

const SUCCESS_MESSAGE: &str = "transfer completed successfully";
const GENERIC_FAILURE: &str = "transfer failed";

/// Message surfaced next to the form; at most one lives at a time and the
/// first edit clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Source,
    Destination,
    Amount,
}

/// Token for one issued execution call. `resolve` only applies an outcome
/// whose attempt matches the workflow's current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub request: TransferRequest,
}

pub struct TransferWorkflow {
    executor: Arc<dyn TransferExecutor>,
    draft: TransferDraft,
    /// Validated request, set when leaving Draft, dropped on cancel/resolve
    pending: Option<TransferRequest>,
    state: TransferState,
    notice: Option<Notice>,
    attempt: u64,
}

impl TransferWorkflow {
    /// Entry guard: only tellers may run the workflow. Everyone else gets
    /// `Restricted` and no state machine exists.
    pub fn new(
        flags: FeatureFlags,
        executor: Arc<dyn TransferExecutor>,
    ) -> Result<Self, TransferError> {
        if !flags.is_teller {
            return Err(TransferError::Restricted);
        }
        Ok(Self {
            executor,
            draft: TransferDraft::default(),
            pending: None,
            state: TransferState::Draft,
            notice: None,
            attempt: 0,
        })
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn draft(&self) -> &TransferDraft {
        &self.draft
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(message)) => Some(message),
            _ => None,
        }
    }

    /// Summary for the confirmation dialog; present while a validated
    /// request awaits review or is in flight.
    pub fn summary(&self) -> Option<ConfirmationSummary> {
        match self.state {
            TransferState::AwaitingConfirmation | TransferState::Submitting => {
                self.pending.as_ref().map(ConfirmationSummary::of)
            }
            _ => None,
        }
    }

    /// Edit one field. Clears any notice; from `Failed` the fields are
    /// retained and the workflow falls back to `Draft`; from `Succeeded` a
    /// fresh draft starts. Ignored while a confirmation or submission is
    /// outstanding.
    pub fn edit(&mut self, field: Field, value: &str) {
        if !self.state.accepts_edits() {
            debug!(state = %self.state, "Edit ignored");
            return;
        }
        if self.state == TransferState::Succeeded {
            self.draft.clear();
        }
        self.state = TransferState::Draft;
        self.notice = None;
        let slot = match field {
            Field::Source => &mut self.draft.source_id,
            Field::Destination => &mut self.draft.destination_id,
            Field::Amount => &mut self.draft.amount,
        };
        *slot = value.to_string();
    }

    /// Validate the draft and move to `AwaitingConfirmation`. On failure the
    /// workflow stays in `Draft` with the first violated rule as its error
    /// notice.
    pub fn submit(&mut self) -> Result<(), TransferError> {
        if !self.state.accepts_submit() {
            debug!(state = %self.state, "Submit ignored");
            return Ok(());
        }
        match validate(&self.draft) {
            Ok(request) => {
                debug!(source = %request.source_id, destination = %request.destination_id,
                       "Transfer validated, awaiting confirmation");
                self.pending = Some(request);
                self.state = TransferState::AwaitingConfirmation;
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                self.pending = None;
                self.state = TransferState::Draft;
                self.notice = Some(Notice::Error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Close the confirmation dialog. Fields are retained unchanged.
    pub fn cancel(&mut self) {
        if self.state != TransferState::AwaitingConfirmation {
            debug!(state = %self.state, "Cancel ignored");
            return;
        }
        self.pending = None;
        self.state = TransferState::Draft;
    }

    /// Confirm the reviewed transfer. Returns the submission to execute, or
    /// `None` when there is nothing to confirm. While one is already in
    /// flight this is a no-op, so a double-fired confirm can never issue a
    /// second call.
    pub fn confirm(&mut self) -> Option<Submission> {
        if self.state.is_submitting() {
            warn!("Confirm while submitting ignored");
            return None;
        }
        if self.state != TransferState::AwaitingConfirmation {
            debug!(state = %self.state, "Confirm ignored");
            return None;
        }
        let request = self.pending.clone()?;
        self.attempt += 1;
        self.state = TransferState::Submitting;
        info!(attempt = self.attempt, source = %request.source_id,
              destination = %request.destination_id, "Transfer submitted");
        Some(Submission {
            attempt: self.attempt,
            request,
        })
    }

    /// Apply the outcome of an execution call. Outcomes from a superseded
    /// attempt, or arriving outside `Submitting`, are stale and ignored.
    pub fn resolve(&mut self, attempt: u64, result: Result<ExecutionOutcome, ExecutionError>) {
        if !self.state.is_submitting() || attempt != self.attempt {
            debug!(attempt, current = self.attempt, state = %self.state,
                   "Stale transfer outcome ignored");
            return;
        }
        match result {
            Ok(outcome) if outcome.success => {
                info!(attempt, "Transfer succeeded");
                self.draft.clear();
                self.pending = None;
                self.state = TransferState::Succeeded;
                self.notice = Some(Notice::Success(SUCCESS_MESSAGE.to_string()));
            }
            Ok(outcome) => {
                let message = outcome
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                warn!(attempt, message = %message, "Transfer rejected");
                self.pending = None;
                self.state = TransferState::Failed;
                self.notice = Some(Notice::Error(message));
            }
            Err(e) => {
                warn!(attempt, error = %e, "Transfer execution unreachable");
                self.pending = None;
                self.state = TransferState::Failed;
                self.notice = Some(Notice::Error(GENERIC_FAILURE.to_string()));
            }
        }
    }

    /// Confirm and drive the execution call to completion: exactly one call
    /// per accepted confirm, zero when the confirm is a no-op.
    pub async fn confirm_and_execute(&mut self) -> TransferState {
        if let Some(submission) = self.confirm() {
            let executor = Arc::clone(&self.executor);
            let result = executor.execute(&submission.request).await;
            self.resolve(submission.attempt, result);
        }
        self.state
    }
}
