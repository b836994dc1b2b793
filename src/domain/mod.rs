//! Domain layer: digit value objects, the Luhn engine and the ports it depends on.

pub mod digits;
pub mod luhn;
pub mod ports;
