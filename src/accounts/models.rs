//! Account projection as the gateway serves it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bank account row. Balances are signed; overdrafts show negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    #[serde(rename = "rib")]
    pub identifier: String,

    #[serde(rename = "type")]
    pub account_type: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,

    #[serde(rename = "createdAt")]
    pub opened_at: DateTime<Utc>,

    /// Present when the gateway joins the owning customer; a teller-only
    /// column in every surface that renders it.
    #[serde(default, rename = "customer")]
    owner: Option<AccountOwner>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountOwner {
    pub name: String,
}

impl AccountRecord {
    pub fn new(
        identifier: impl Into<String>,
        account_type: impl Into<String>,
        balance: Decimal,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            account_type: account_type.into(),
            balance,
            opened_at,
            owner: None,
        }
    }

    pub fn with_owner(mut self, name: impl Into<String>) -> Self {
        self.owner = Some(AccountOwner { name: name.into() });
        self
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.name.as_str())
    }

    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_sign_negative() && !self.balance.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decode_gateway_row() {
        let record: AccountRecord = serde_json::from_str(
            r#"{
                "rib": "FR001",
                "type": "CURRENT_ACCOUNT",
                "balance": 1250.75,
                "createdAt": "2024-03-01T09:30:00Z",
                "customer": {"name": "Alice Martin"}
            }"#,
        )
        .unwrap();

        assert_eq!(record.identifier, "FR001");
        assert_eq!(record.balance, Decimal::from_str("1250.75").unwrap());
        assert_eq!(record.owner_name(), Some("Alice Martin"));
        assert!(!record.is_overdrawn());
    }

    #[test]
    fn test_decode_without_owner() {
        let record: AccountRecord = serde_json::from_str(
            r#"{
                "rib": "FR002",
                "type": "SAVING_ACCOUNT",
                "balance": -10.5,
                "createdAt": "2024-03-01T09:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.owner_name(), None);
        assert!(record.is_overdrawn());
    }
}
