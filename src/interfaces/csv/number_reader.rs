use crate::error::{LuhnError, Result};
use serde::Deserialize;
use std::io::Read;

/// A row of a numbers file. Columns other than `number` are ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct NumberRecord {
    pub number: String,
}

/// Reads numbers to check from a CSV source with a header row.
///
/// Whitespace around fields is trimmed and rows may carry extra columns.
pub struct NumberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> NumberReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes the rows; a malformed row yields an `Err` and the stream continues.
    pub fn numbers(self) -> impl Iterator<Item = Result<NumberRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LuhnError::from))
    }
}
