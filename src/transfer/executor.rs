//! Execution service adapters.
//!
//! The workflow talks to the ledger through `TransferExecutor`;
//! `HttpTransferExecutor` posts to the gateway and `MockTransferExecutor`
//! simulates verdicts for tests.

use super::error::ExecutionError;
use super::types::{ExecutionOutcome, TransferRequest};
use crate::client::ApiClient;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::debug;

#[async_trait]
pub trait TransferExecutor: Send + Sync {
    /// Ask the ledger to execute one transfer. `Ok` carries the backend's
    /// verdict, accepted or rejected; `Err` means no verdict was obtained.
    /// The far end is assumed idempotent-safe under client retry.
    async fn execute(&self, request: &TransferRequest) -> Result<ExecutionOutcome, ExecutionError>;
}

pub struct HttpTransferExecutor {
    api: ApiClient,
}

impl HttpTransferExecutor {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TransferExecutor for HttpTransferExecutor {
    async fn execute(&self, request: &TransferRequest) -> Result<ExecutionOutcome, ExecutionError> {
        let response = self.api.post("/transfers").json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Rejections may arrive as a failure status with a JSON body; keep
        // the backend's message when it sent one.
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ExecutionOutcome>(&body) {
            Ok(outcome) if !outcome.success => Ok(outcome),
            _ => {
                debug!(status = %status, "Transfer call failed without a verdict");
                Err(ExecutionError(format!("status {}", status.as_u16())))
            }
        }
    }
}

/// Scriptable executor for tests: verdict switches plus a call counter, so
/// tests can assert exactly how many execution calls a workflow issued.
#[derive(Default)]
pub struct MockTransferExecutor {
    reject_with: Mutex<Option<String>>,
    fail_transport: AtomicBool,
    calls: AtomicUsize,
    last_request: Mutex<Option<TransferRequest>>,
}

impl MockTransferExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next calls come back rejected with this message.
    pub fn set_rejection(&self, message: impl Into<String>) {
        *self.reject_with.lock().unwrap() = Some(message.into());
    }

    pub fn clear_rejection(&self) {
        *self.reject_with.lock().unwrap() = None;
    }

    /// Make the next calls fail at the transport layer.
    pub fn set_fail_transport(&self, fail: bool) {
        self.fail_transport.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<TransferRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferExecutor for MockTransferExecutor {
    async fn execute(&self, request: &TransferRequest) -> Result<ExecutionOutcome, ExecutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if self.fail_transport.load(Ordering::SeqCst) {
            return Err(ExecutionError("connection refused".to_string()));
        }
        match self.reject_with.lock().unwrap().clone() {
            Some(message) => Ok(ExecutionOutcome::rejected(message)),
            None => Ok(ExecutionOutcome::ok()),
        }
    }
}
