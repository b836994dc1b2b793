use crate::error::{LuhnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequence of ASCII decimal digits.
///
/// This is the canonical internal representation handled by the Luhn engine.
/// Construction either strips everything that is not a digit ([`DigitSequence::sanitize`])
/// or rejects such input ([`DigitSequence::parse`]), so a value of this type never
/// contains anything other than `0`-`9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitSequence(String);

impl DigitSequence {
    /// Keeps only the ASCII digits of `input`, so formatting such as spaces or dashes is tolerated.
    pub fn sanitize(input: &str) -> Self {
        Self(input.chars().filter(char::is_ascii_digit).collect())
    }

    /// Accepts `input` only if every character is an ASCII digit.
    pub fn parse(input: &str) -> Result<Self> {
        if input.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(LuhnError::InvalidDigits(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric values of the digits, leftmost first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Returns a new sequence with `check` appended.
    pub fn with_check_digit(&self, check: CheckDigit) -> Self {
        let mut digits = String::with_capacity(self.0.len() + 1);
        digits.push_str(&self.0);
        digits.push(check.into());
        Self(digits)
    }

    /// Splits off the trailing digit, returning the payload and the check digit.
    pub fn split_check_digit(&self) -> Option<(DigitSequence, CheckDigit)> {
        let (payload, last) = self.0.split_at_checked(self.0.len().checked_sub(1)?)?;
        let check = CheckDigit(last.as_bytes()[0] - b'0');
        Some((Self(payload.to_string()), check))
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DigitSequence {
    type Error = LuhnError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DigitSequence> for String {
    fn from(sequence: DigitSequence) -> Self {
        sequence.0
    }
}

/// A single check digit in `[0, 9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Reduces a running Luhn sum to the digit that brings it to a multiple of ten.
    pub(crate) fn from_sum(sum: u32) -> Self {
        let remainder = (sum % 10) as u8;
        Self((10 - remainder) % 10)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("check digit out of range: {value}"))
    }
}

impl From<CheckDigit> for u8 {
    fn from(check: CheckDigit) -> Self {
        check.0
    }
}

impl From<CheckDigit> for char {
    fn from(check: CheckDigit) -> Self {
        char::from(b'0' + check.0)
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_formatting() {
        let seq = DigitSequence::sanitize("4000-0012 3456 7899");
        assert_eq!(seq.as_str(), "4000001234567899");
    }

    #[test]
    fn test_sanitize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of the digit alphabet.
        let seq = DigitSequence::sanitize("1٢3");
        assert_eq!(seq.as_str(), "13");
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(DigitSequence::parse("471608").is_ok());
        assert!(DigitSequence::parse("").is_ok());
        assert!(matches!(
            DigitSequence::parse("4716-08"),
            Err(LuhnError::InvalidDigits(_))
        ));
    }

    #[test]
    fn test_digits_iterates_values() {
        let seq = DigitSequence::sanitize("0907");
        assert_eq!(seq.digits().collect::<Vec<_>>(), vec![0, 9, 0, 7]);
        assert_eq!(seq.digits().rev().next(), Some(7));
    }

    #[test]
    fn test_split_and_append_check_digit() {
        let seq = DigitSequence::sanitize("79927398713");
        let (payload, check) = seq.split_check_digit().unwrap();
        assert_eq!(payload.as_str(), "7992739871");
        assert_eq!(check.value(), 3);
        assert_eq!(payload.with_check_digit(check), seq);

        assert!(DigitSequence::default().split_check_digit().is_none());
    }

    #[test]
    fn test_check_digit_range() {
        assert!(CheckDigit::new(9).is_some());
        assert!(CheckDigit::new(10).is_none());
        assert_eq!(char::from(CheckDigit::new(0).unwrap()), '0');
    }

    #[test]
    fn test_check_digit_from_sum() {
        assert_eq!(CheckDigit::from_sum(0).value(), 0);
        assert_eq!(CheckDigit::from_sum(67).value(), 3);
        assert_eq!(CheckDigit::from_sum(70).value(), 0);
    }

    #[test]
    fn test_serde_representation() {
        let seq = DigitSequence::sanitize("42");
        assert_eq!(serde_json::to_string(&seq).unwrap(), "\"42\"");
        assert_eq!(
            serde_json::to_string(&CheckDigit::new(7).unwrap()).unwrap(),
            "7"
        );
        assert!(serde_json::from_str::<CheckDigit>("12").is_err());
        assert!(serde_json::from_str::<DigitSequence>("\"4x\"").is_err());
    }
}
