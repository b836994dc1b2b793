//! File formats spoken by the command-line front end.

pub mod csv;
pub mod json;
