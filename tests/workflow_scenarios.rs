//! End-to-end scenarios through the public API: a session blob comes in,
//! flags come out, and a teller drives a transfer to completion.

use std::sync::Arc;

use irbank_client::policy::{self, FeatureFlags};
use irbank_client::roles;
use irbank_client::session::{RawRoles, Session};
use irbank_client::transfer::{
    Field, MockTransferExecutor, TransferError, TransferState, TransferWorkflow,
};

fn teller_session() -> Session {
    serde_json::from_str(
        r#"{"username":"guichet1","jwtToken":"tok","roles":[{"authority":"TELLER"}]}"#,
    )
    .unwrap()
}

fn flags_for(session: &Session) -> FeatureFlags {
    let permissions = roles::resolve(&session.raw_roles);
    policy::derive_flags(&permissions, &session.username)
}

fn teller_workflow() -> (TransferWorkflow, Arc<MockTransferExecutor>) {
    let executor = Arc::new(MockTransferExecutor::new());
    let workflow = TransferWorkflow::new(flags_for(&teller_session()), executor.clone()).unwrap();
    (workflow, executor)
}

fn fill(workflow: &mut TransferWorkflow, source: &str, destination: &str, amount: &str) {
    workflow.edit(Field::Source, source);
    workflow.edit(Field::Destination, destination);
    workflow.edit(Field::Amount, amount);
}

#[test]
fn scenario_same_account_fails_validation() {
    let (mut workflow, _) = teller_workflow();
    fill(&mut workflow, "FR001", "FR001", "100");

    assert!(workflow.submit().is_err());
    assert_eq!(
        workflow.error_message(),
        Some("source and destination accounts must differ")
    );
}

#[test]
fn scenario_negative_amount_fails_validation() {
    let (mut workflow, _) = teller_workflow();
    fill(&mut workflow, "FR001", "FR002", "-5");

    assert!(workflow.submit().is_err());
    assert_eq!(
        workflow.error_message(),
        Some("amount must be a positive value")
    );
}

#[tokio::test]
async fn scenario_valid_transfer_confirms_and_executes_once() {
    let (mut workflow, executor) = teller_workflow();
    fill(&mut workflow, "FR001", "FR002", "100");

    workflow.submit().unwrap();
    assert_eq!(workflow.state(), TransferState::AwaitingConfirmation);

    let summary = workflow.summary().unwrap();
    assert_eq!(summary.source_id, "FR001");
    assert_eq!(summary.destination_id, "FR002");
    assert_eq!(summary.amount.to_string(), "100");

    let state = workflow.confirm_and_execute().await;
    assert_eq!(state, TransferState::Succeeded);
    assert_eq!(executor.call_count(), 1);
}

#[tokio::test]
async fn scenario_insufficient_funds_failure_and_recovery() {
    let (mut workflow, executor) = teller_workflow();
    executor.set_rejection("insufficient funds");
    fill(&mut workflow, "FR001", "FR002", "100");

    workflow.submit().unwrap();
    let state = workflow.confirm_and_execute().await;

    assert_eq!(state, TransferState::Failed);
    assert_eq!(workflow.error_message(), Some("insufficient funds"));
    assert_eq!(workflow.draft().source_id, "FR001");
    assert_eq!(workflow.draft().destination_id, "FR002");
    assert_eq!(workflow.draft().amount, "100");

    workflow.edit(Field::Amount, "80");
    assert_eq!(workflow.state(), TransferState::Draft);
    assert_eq!(workflow.error_message(), None);
}

#[test]
fn scenario_malformed_roles_and_admin_override() {
    // "not json" resolves to no permissions at all
    let permissions = roles::resolve(&RawRoles::Text("not json".to_string()));
    assert!(permissions.is_empty());

    let alice = policy::derive_flags(&permissions, "alice");
    assert!(!alice.is_client && !alice.is_teller && !alice.is_teller_read_only);

    let admin = policy::derive_flags(&permissions, "admin");
    assert!(admin.is_client && admin.is_teller && admin.is_teller_read_only);
}

#[test]
fn scenario_non_teller_cannot_enter_workflow() {
    let session: Session = serde_json::from_str(
        r#"{"username":"alice","jwtToken":"tok","roles":["CLIENT"]}"#,
    )
    .unwrap();
    let executor = Arc::new(MockTransferExecutor::new());
    let denied = TransferWorkflow::new(flags_for(&session), executor);
    assert!(matches!(denied, Err(TransferError::Restricted)));
}
