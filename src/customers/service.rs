use super::models::{CustomerRecord, CustomerUpdate};
use crate::accounts::LookupError;
use crate::client::ApiClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn list(&self) -> Result<Vec<CustomerRecord>, LookupError>;
    async fn create(&self, record: &CustomerRecord) -> Result<(), LookupError>;
    async fn update(&self, identity_ref: &str, update: &CustomerUpdate)
    -> Result<(), LookupError>;
    async fn delete(&self, identity_ref: &str) -> Result<(), LookupError>;
}

pub struct HttpCustomerService {
    api: ApiClient,
}

impl HttpCustomerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn check(status: StatusCode) -> Result<(), LookupError> {
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Backend {
                status: status.as_u16(),
                message: String::new(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerService for HttpCustomerService {
    async fn list(&self) -> Result<Vec<CustomerRecord>, LookupError> {
        let response = self.api.get("/customers").send().await?;
        Self::check(response.status())?;
        Ok(response.json().await?)
    }

    async fn create(&self, record: &CustomerRecord) -> Result<(), LookupError> {
        let response = self.api.post("/customers").json(record).send().await?;
        Self::check(response.status())
    }

    async fn update(
        &self,
        identity_ref: &str,
        update: &CustomerUpdate,
    ) -> Result<(), LookupError> {
        let response = self
            .api
            .put(&format!("/customers/{}", identity_ref))
            .json(update)
            .send()
            .await?;
        Self::check(response.status())
    }

    async fn delete(&self, identity_ref: &str) -> Result<(), LookupError> {
        let response = self
            .api
            .delete(&format!("/customers/{}", identity_ref))
            .send()
            .await?;
        Self::check(response.status())
    }
}

/// In-memory directory for tests.
#[derive(Default)]
pub struct MockCustomerService {
    records: Mutex<Vec<CustomerRecord>>,
}

impl MockCustomerService {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl CustomerService for MockCustomerService {
    async fn list(&self) -> Result<Vec<CustomerRecord>, LookupError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, record: &CustomerRecord) -> Result<(), LookupError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn update(
        &self,
        identity_ref: &str,
        update: &CustomerUpdate,
    ) -> Result<(), LookupError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.identity_ref == identity_ref)
            .ok_or(LookupError::NotFound)?;
        record.firstname = update.firstname.clone();
        record.lastname = update.lastname.clone();
        record.username = update.username.clone();
        Ok(())
    }

    async fn delete(&self, identity_ref: &str) -> Result<(), LookupError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.identity_ref != identity_ref);
        if records.len() == before {
            return Err(LookupError::NotFound);
        }
        Ok(())
    }
}
