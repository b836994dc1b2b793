use luhn_lab::domain::digits::DigitSequence;
use luhn_lab::domain::luhn::{
    check_digit_for, double_and_reduce, generate_compliant_number, is_valid,
};
use luhn_lab::infrastructure::random::{RngDigits, ScriptedDigits};

mod common;

#[test]
fn test_appending_check_digit_always_validates() {
    for payload in common::random_digit_strings(1, 2_000, 24) {
        if payload.is_empty() {
            continue;
        }
        let complete = format!("{payload}{}", check_digit_for(&payload));
        assert!(is_valid(&complete), "{complete} should be valid");
    }
}

#[test]
fn test_empty_payload_completes_to_a_single_invalid_digit() {
    // Under two digits is never valid, even though the checksum of "0" is zero.
    assert_eq!(check_digit_for("").value(), 0);
    assert!(!is_valid("0"));
}

#[test]
fn test_revalidation_reproduces_valid_numbers() {
    for payload in common::random_digit_strings(2, 2_000, 24) {
        let number = format!("{payload}{}", check_digit_for(&payload));
        if !is_valid(&number) {
            continue;
        }
        let (head, _) = number.split_at(number.len() - 1);
        assert_eq!(format!("{head}{}", check_digit_for(head)), number);
    }
}

#[test]
fn test_exactly_one_check_digit_validates() {
    for payload in common::random_digit_strings(3, 500, 20) {
        let passing = (0..=9)
            .filter(|d| is_valid(&format!("{payload}{d}")))
            .count();
        // A bare check digit is too short to validate on its own.
        let expected = if payload.is_empty() { 0 } else { 1 };
        assert_eq!(passing, expected, "payload {payload:?}");
    }
}

#[test]
fn test_single_digit_errors_are_detected() {
    for payload in common::random_digit_strings(4, 300, 16) {
        let number = format!("{payload}{}", check_digit_for(&payload));
        if number.len() < 2 {
            continue;
        }
        for (position, original) in number.char_indices() {
            for replacement in '0'..='9' {
                if replacement == original {
                    continue;
                }
                let mut mutated = number.clone();
                mutated.replace_range(position..position + 1, &replacement.to_string());
                assert!(!is_valid(&mutated), "{mutated} should be invalid");
            }
        }
    }
}

#[test]
fn test_doubling_stays_in_digit_range() {
    for digit in 0..=9u8 {
        let expected = if digit <= 4 { digit * 2 } else { digit * 2 - 9 };
        assert_eq!(double_and_reduce(digit), expected);
        assert!(double_and_reduce(digit) <= 9);
    }
}

#[test]
fn test_length_contract() {
    let mut source = RngDigits::seeded(5);
    for prefix in common::random_digit_strings(6, 500, 19) {
        for target_length in (prefix.len() + 1).max(2)..=19 {
            let number = generate_compliant_number(&prefix, target_length, &mut source).unwrap();
            assert_eq!(number.len(), target_length);
            assert!(number.as_str().starts_with(&prefix));
            assert!(is_valid(number.as_str()));
        }
    }
}

#[test]
fn test_generation_is_pure_under_fixed_randomness() {
    let run = || -> Vec<DigitSequence> {
        let mut source = ScriptedDigits::new("2718281828459045");
        (0..10)
            .map(|_| generate_compliant_number("400011", 16, &mut source).unwrap())
            .collect()
    };
    assert_eq!(run(), run());
}
