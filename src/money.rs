//! Amount parsing and display formatting.
//!
//! Form input becomes a `Decimal` here on its way into a transfer request;
//! display formatting only ever produces a separate string. The submitted
//! value is the raw `Decimal`; formatting must never alter it.
//!
//! ## Format rules
//! - Input: plain decimal notation only. `.5`, `5.` and scientific notation
//!   are rejected rather than guessed at.
//! - Display: cent-rounded, groups of three separated by spaces, comma as
//!   the decimal separator, trailing `€` (the backend accounts are EUR).

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("empty amount")]
    Empty,

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Parse a form amount into a `Decimal`.
///
/// Sign is preserved; whether the amount is positive is the workflow's
/// validation concern, not a parse concern.
pub fn parse_amount(input: &str) -> Result<Decimal, MoneyError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MoneyError::Empty);
    }
    if input.contains('e') || input.contains('E') {
        return Err(MoneyError::InvalidFormat(
            "scientific notation not allowed".into(),
        ));
    }
    let digits = input.trim_start_matches(['-', '+']);
    if digits.starts_with('.') {
        return Err(MoneyError::InvalidFormat("use 0.5 not .5".into()));
    }
    if digits.ends_with('.') {
        return Err(MoneyError::InvalidFormat("use 5.0 not 5.".into()));
    }
    Decimal::from_str(input).map_err(|e| MoneyError::InvalidFormat(e.to_string()))
}

/// Format an amount for human review, e.g. `12 345,60 €`.
///
/// Rounds to the cent, half away from zero.
pub fn format_eur(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", cents.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = whole.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{},{} €", sign, grouped, frac)
}

/// Inverse of [`format_eur`]: recover the numeric value from display text.
pub fn parse_eur(display: &str) -> Result<Decimal, MoneyError> {
    let cleaned: String = display
        .trim()
        .trim_end_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Err(MoneyError::Empty);
    }
    Decimal::from_str(&cleaned).map_err(|e| MoneyError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(parse_amount("100"), Ok(d("100")));
        assert_eq!(parse_amount(" 0.01 "), Ok(d("0.01")));
        assert_eq!(parse_amount("-5"), Ok(d("-5")));
    }

    #[test]
    fn test_parse_rejects_loose_formats() {
        assert_eq!(parse_amount(""), Err(MoneyError::Empty));
        assert!(parse_amount(".5").is_err());
        assert!(parse_amount("5.").is_err());
        assert!(parse_amount("-.5").is_err());
        assert!(parse_amount("1e3").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(d("100")), "100,00 €");
        assert_eq!(format_eur(d("12345.6")), "12 345,60 €");
        assert_eq!(format_eur(d("1234567.891")), "1 234 567,89 €");
        assert_eq!(format_eur(d("-42.5")), "-42,50 €");
        assert_eq!(format_eur(d("0")), "0,00 €");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_eur(d("1.005")), "1,01 €");
        assert_eq!(format_eur(d("-1.005")), "-1,01 €");
    }

    #[test]
    fn test_display_round_trip_to_the_cent() {
        for raw in ["100", "12345.60", "0.01", "999999.99", "-42.50"] {
            let amount = parse_amount(raw).unwrap();
            let display = format_eur(amount);
            let reparsed = parse_eur(&display).unwrap();
            assert_eq!(reparsed, amount.round_dp(2), "round trip failed for {raw}");
        }
    }

    #[test]
    fn test_parse_eur_strips_grouping() {
        assert_eq!(parse_eur("1 234 567,89 €"), Ok(d("1234567.89")));
        assert_eq!(parse_eur("-42,50 €"), Ok(d("-42.50")));
    }
}
