//! Transfer data types: raw form draft, validated request, wire outcome.

use super::error::ValidationError;
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three form fields exactly as typed. Owned by one workflow instance
/// and discarded with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferDraft {
    pub source_id: String,
    pub destination_id: String,
    pub amount: String,
}

impl TransferDraft {
    pub fn clear(&mut self) {
        *self = TransferDraft::default();
    }
}

/// Validated payload submitted to the execution service. The amount is the
/// unformatted decimal; display formatting never feeds back into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub source_id: String,
    pub destination_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Validate a draft, first violated rule wins:
/// source present → destination present → amount positive → accounts differ.
pub fn validate(draft: &TransferDraft) -> Result<TransferRequest, ValidationError> {
    let source_id = draft.source_id.trim();
    if source_id.is_empty() {
        return Err(ValidationError::MissingSource);
    }

    let destination_id = draft.destination_id.trim();
    if destination_id.is_empty() {
        return Err(ValidationError::MissingDestination);
    }

    let amount = match money::parse_amount(&draft.amount) {
        Ok(amount) if amount > Decimal::ZERO => amount,
        _ => return Err(ValidationError::NonPositiveAmount),
    };

    if source_id == destination_id {
        return Err(ValidationError::SameAccount);
    }

    Ok(TransferRequest {
        source_id: source_id.to_string(),
        destination_id: destination_id.to_string(),
        amount,
    })
}

/// Verdict of the execution service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExecutionOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// What the confirmation dialog shows. `display_amount` is cent-rounded for
/// review; `amount` is the value actually submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub source_id: String,
    pub destination_id: String,
    pub amount: Decimal,
    pub display_amount: String,
}

impl ConfirmationSummary {
    pub fn of(request: &TransferRequest) -> Self {
        Self {
            source_id: request.source_id.clone(),
            destination_id: request.destination_id.clone(),
            amount: request.amount,
            display_amount: money::format_eur(request.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft(source: &str, destination: &str, amount: &str) -> TransferDraft {
        TransferDraft {
            source_id: source.to_string(),
            destination_id: destination.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_validation_order() {
        // Every rule violated at once: the source rule is the one reported.
        assert_eq!(
            validate(&draft("", "", "-1")),
            Err(ValidationError::MissingSource)
        );
        assert_eq!(
            validate(&draft("FR001", "", "-1")),
            Err(ValidationError::MissingDestination)
        );
        assert_eq!(
            validate(&draft("FR001", "FR001", "-1")),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            validate(&draft("FR001", "FR001", "100")),
            Err(ValidationError::SameAccount)
        );
    }

    #[test]
    fn test_each_rule_independently() {
        assert_eq!(
            validate(&draft("  ", "FR002", "100")),
            Err(ValidationError::MissingSource)
        );
        assert_eq!(
            validate(&draft("FR001", "  ", "100")),
            Err(ValidationError::MissingDestination)
        );
        assert_eq!(
            validate(&draft("FR001", "FR002", "0")),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            validate(&draft("FR001", "FR002", "garbage")),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_valid_draft() {
        let request = validate(&draft(" FR001 ", "FR002", " 100.50 ")).unwrap();
        assert_eq!(request.source_id, "FR001");
        assert_eq!(request.destination_id, "FR002");
        assert_eq!(request.amount, Decimal::from_str("100.50").unwrap());
    }

    #[test]
    fn test_wire_shape() {
        let request = validate(&draft("FR001", "FR002", "100")).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "sourceId": "FR001",
                "destinationId": "FR002",
                "amount": 100.0
            })
        );
    }

    #[test]
    fn test_summary_preserves_submitted_amount() {
        let request = validate(&draft("FR001", "FR002", "12345.678")).unwrap();
        let summary = ConfirmationSummary::of(&request);
        // Display rounds to the cent; the submitted value keeps every digit.
        assert_eq!(summary.display_amount, "12 345,68 €");
        assert_eq!(summary.amount, Decimal::from_str("12345.678").unwrap());
        assert_eq!(request.amount, Decimal::from_str("12345.678").unwrap());
    }

    #[test]
    fn test_outcome_decode() {
        let outcome: ExecutionOutcome = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, None);

        let outcome: ExecutionOutcome =
            serde_json::from_str(r#"{"success":false,"message":"insufficient funds"}"#).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("insufficient funds"));
    }
}
