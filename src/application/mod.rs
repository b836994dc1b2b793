//! Application layer: the use cases built on top of the Luhn engine.
//!
//! `inspector` backs checking user-entered numbers and computing missing check digits.
//! `synthesizer` backs generating batches of compliant numbers from an issuer prefix.

pub mod inspector;
pub mod synthesizer;
