//! Transfer workflow states.

use std::fmt;

/// States of one wire-transfer attempt.
///
/// No state is terminal: `Succeeded` and `Failed` re-enter `Draft` on the
/// next edit. `Submitting` is the only state with an outstanding execution
/// call, and there is never more than one in flight per workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferState {
    /// Data entry; the only state that reports validation errors
    Draft,

    /// Validated request shown for human review
    AwaitingConfirmation,

    /// Execution call in flight; confirm is a no-op here
    Submitting,

    /// Execution acknowledged; draft cleared
    Succeeded,

    /// Execution rejected or unreachable; draft retained
    Failed,
}

impl TransferState {
    /// Fields accept edits in these states (editing `Succeeded`/`Failed`
    /// first falls back to `Draft`).
    #[inline]
    pub fn accepts_edits(&self) -> bool {
        matches!(
            self,
            TransferState::Draft | TransferState::Succeeded | TransferState::Failed
        )
    }

    /// Submit is meaningful in these states.
    #[inline]
    pub fn accepts_submit(&self) -> bool {
        matches!(self, TransferState::Draft | TransferState::Failed)
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        matches!(self, TransferState::Submitting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferState::Draft => "DRAFT",
            TransferState::AwaitingConfirmation => "AWAITING_CONFIRMATION",
            TransferState::Submitting => "SUBMITTING",
            TransferState::Succeeded => "SUCCEEDED",
            TransferState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_acceptance() {
        assert!(TransferState::Draft.accepts_edits());
        assert!(TransferState::Succeeded.accepts_edits());
        assert!(TransferState::Failed.accepts_edits());

        assert!(!TransferState::AwaitingConfirmation.accepts_edits());
        assert!(!TransferState::Submitting.accepts_edits());
    }

    #[test]
    fn test_submit_acceptance() {
        assert!(TransferState::Draft.accepts_submit());
        assert!(TransferState::Failed.accepts_submit());

        assert!(!TransferState::AwaitingConfirmation.accepts_submit());
        assert!(!TransferState::Submitting.accepts_submit());
        assert!(!TransferState::Succeeded.accepts_submit());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransferState::Draft.to_string(), "DRAFT");
        assert_eq!(
            TransferState::AwaitingConfirmation.to_string(),
            "AWAITING_CONFIRMATION"
        );
        assert_eq!(TransferState::Submitting.to_string(), "SUBMITTING");
    }
}
