use crate::domain::digits::{CheckDigit, DigitSequence};
use crate::domain::luhn;
use crate::error::{LuhnError, Result};
use serde::Serialize;
use tracing::trace;

/// The outcome of checking one free-form number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    /// The text as it was entered.
    pub input: String,
    /// The digits that remain after stripping formatting.
    pub digits: DigitSequence,
    /// `None` until at least two digits are present.
    pub valid: Option<bool>,
    /// The check digit the payload calls for, if there is a payload.
    pub expected_check_digit: Option<CheckDigit>,
}

impl Inspection {
    /// True only when a verdict exists and it is positive.
    pub fn is_valid(&self) -> bool {
        self.valid == Some(true)
    }
}

/// Checks `input` against the Luhn property.
pub fn inspect(input: &str) -> Inspection {
    let digits = DigitSequence::sanitize(input);
    let valid = (digits.len() > 1).then(|| luhn::is_valid_sequence(&digits));
    let expected_check_digit = digits
        .split_check_digit()
        .filter(|(payload, _)| !payload.is_empty())
        .map(|(payload, _)| luhn::check_digit_for_sequence(&payload));

    trace!(input, digits = %digits, ?valid, "inspected number");

    Inspection {
        input: input.to_string(),
        digits,
        valid,
        expected_check_digit,
    }
}

/// Treats all of `input` as payload and appends the check digit it needs.
///
/// # Errors
///
/// Returns [`LuhnError::EmptyPayload`] when `input` holds no digits at all.
pub fn complete(input: &str) -> Result<(CheckDigit, DigitSequence)> {
    let payload = DigitSequence::sanitize(input);
    if payload.is_empty() {
        return Err(LuhnError::EmptyPayload);
    }
    let check = luhn::check_digit_for_sequence(&payload);
    Ok((check, payload.with_check_digit(check)))
}
