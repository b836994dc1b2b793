//! The Luhn (modulus 10) checksum engine.
//!
//! Every function here is pure: inputs are sanitized or validated up front and the only
//! non-determinism, the filler digits of [`generate_compliant_number`], comes from the
//! [`DigitSource`] handed in by the caller.

use super::digits::{CheckDigit, DigitSequence};
use super::ports::DigitSource;
use crate::error::{LuhnError, Result};
use std::iter;

/// Default total length of a generated number, check digit included.
pub const DEFAULT_TARGET_LENGTH: usize = 16;

/// Doubles a digit and folds the result back into `[0, 9]`.
///
/// `digit` must itself be in `[0, 9]`.
pub fn double_and_reduce(digit: u8) -> u8 {
    debug_assert!(digit <= 9, "not a decimal digit: {digit}");
    let doubled = digit * 2;
    if doubled > 9 { doubled - 9 } else { doubled }
}

/// Weighted sum walking from the rightmost digit. `double_first` selects whether the
/// rightmost digit is doubled, after which doubling alternates.
fn luhn_sum(sequence: &DigitSequence, double_first: bool) -> u32 {
    sequence
        .digits()
        .rev()
        .enumerate()
        .map(|(offset, digit)| {
            if (offset % 2 == 0) == double_first {
                double_and_reduce(digit)
            } else {
                digit
            }
        })
        .map(u32::from)
        .sum()
}

/// Returns `true` if the digits of `input` satisfy the Luhn property.
///
/// Non-digit characters are stripped first. Fewer than two remaining digits is never valid.
pub fn is_valid(input: &str) -> bool {
    is_valid_sequence(&DigitSequence::sanitize(input))
}

pub fn is_valid_sequence(sequence: &DigitSequence) -> bool {
    if sequence.len() < 2 {
        return false;
    }
    luhn_sum(sequence, false) % 10 == 0
}

/// Computes the digit that, appended to `partial`, makes a valid sequence.
///
/// `partial` is the payload without its check digit; non-digit characters are stripped.
/// An empty payload yields `0`.
pub fn check_digit_for(partial: &str) -> CheckDigit {
    check_digit_for_sequence(&DigitSequence::sanitize(partial))
}

pub fn check_digit_for_sequence(payload: &DigitSequence) -> CheckDigit {
    // The rightmost payload digit sits next to the future check digit, so it is doubled.
    CheckDigit::from_sum(luhn_sum(payload, true))
}

/// Generates a Luhn-valid number of exactly `target_length` digits starting with `prefix`.
///
/// The prefix is used literally and must be digits only. Digits drawn from `source` fill
/// the gap up to `target_length - 1`, then the check digit is appended.
///
/// # Errors
///
/// * [`LuhnError::InvalidDigits`] if `prefix` contains anything but `0`-`9`.
/// * [`LuhnError::TargetTooShort`] if `target_length < 2`.
/// * [`LuhnError::PrefixTooLong`] if `prefix` already fills `target_length`.
pub fn generate_compliant_number<S>(
    prefix: &str,
    target_length: usize,
    source: &mut S,
) -> Result<DigitSequence>
where
    S: DigitSource + ?Sized,
{
    let prefix = DigitSequence::parse(prefix)?;
    if target_length < 2 {
        return Err(LuhnError::TargetTooShort(target_length));
    }
    if prefix.len() >= target_length {
        return Err(LuhnError::PrefixTooLong {
            prefix_len: prefix.len(),
            target_length,
        });
    }

    let fill = target_length - 1 - prefix.len();
    let payload: String = prefix
        .as_str()
        .chars()
        .chain(
            iter::repeat_with(|| char::from(b'0' + source.next_digit() % 10)).take(fill),
        )
        .collect();
    let payload = DigitSequence::sanitize(&payload);

    Ok(payload.with_check_digit(check_digit_for_sequence(&payload)))
}
