//! Account query services.
//!
//! `AccountService` is the seam between the lookup component and the
//! gateway; `HttpAccountService` talks to the real backend and
//! `MockAccountService` replays canned answers for tests.

use super::error::LookupError;
use super::models::AccountRecord;
use crate::client::ApiClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

#[async_trait]
pub trait AccountService: Send + Sync {
    /// All accounts visible to this session. Zero accounts is an empty list,
    /// not an error.
    async fn list_all(&self) -> Result<Vec<AccountRecord>, LookupError>;

    /// One account by RIB. Blank identifiers resolve to `NotFound` without a
    /// request.
    async fn find_by_identifier(&self, identifier: &str) -> Result<AccountRecord, LookupError>;
}

pub struct HttpAccountService {
    api: ApiClient,
}

impl HttpAccountService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountService for HttpAccountService {
    async fn list_all(&self) -> Result<Vec<AccountRecord>, LookupError> {
        let response = self.api.get("/accounts").send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status, response.text().await.ok()));
        }
        Ok(response.json().await?)
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<AccountRecord, LookupError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            debug!("Blank identifier, not querying");
            return Err(LookupError::NotFound);
        }

        let response = self
            .api
            .get("/accounts")
            .query(&[("identifier", identifier)])
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(backend_error(status, response.text().await.ok()));
        }
        Ok(response.json().await?)
    }
}

/// Prefer the backend's own `message` field; fall back to the raw body, then
/// to the status reason.
fn backend_error(status: StatusCode, body: Option<String>) -> LookupError {
    let message = body
        .as_deref()
        .and_then(|b| serde_json::from_str::<serde_json::Value>(b).ok())
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .or(body)
        .unwrap_or_default();
    LookupError::Backend {
        status: status.as_u16(),
        message,
    }
}

/// Canned-answer service for tests. Counts requests so callers can assert
/// that short-circuits issued none.
#[derive(Default)]
pub struct MockAccountService {
    accounts: Mutex<Vec<AccountRecord>>,
    fail_with: Mutex<Option<LookupError>>,
    calls: AtomicUsize,
}

impl MockAccountService {
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            ..Default::default()
        }
    }

    pub fn set_failure(&self, error: LookupError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn list_all(&self) -> Result<Vec<AccountRecord>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<AccountRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.identifier == identifier.trim())
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_prefers_message_field() {
        let err = backend_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(r#"{"message":"ledger offline"}"#.to_string()),
        );
        assert_eq!(
            err,
            LookupError::Backend {
                status: 500,
                message: "ledger offline".to_string()
            }
        );
    }

    #[test]
    fn test_backend_error_falls_back_to_body() {
        let err = backend_error(StatusCode::BAD_GATEWAY, Some("gateway down".to_string()));
        assert_eq!(
            err,
            LookupError::Backend {
                status: 502,
                message: "gateway down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_mock_find() {
        let service = MockAccountService::new(vec![AccountRecord::new(
            "FR001",
            "CURRENT_ACCOUNT",
            rust_decimal::Decimal::ONE_HUNDRED,
            chrono::Utc::now(),
        )]);
        assert!(service.find_by_identifier("FR001").await.is_ok());
        assert_eq!(
            service.find_by_identifier("FR999").await,
            Err(LookupError::NotFound)
        );
        assert_eq!(service.call_count(), 2);
    }
}
