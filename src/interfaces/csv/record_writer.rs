use crate::application::synthesizer::SyntheticRecord;
use crate::error::Result;
use std::io::Write;

/// Writes synthetic records as CSV with the header `index,prefix,number`.
pub struct RecordWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(&mut self, records: &[SyntheticRecord]) -> Result<()> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::synthesizer::Synthesizer;
    use crate::infrastructure::random::ScriptedDigits;

    #[test]
    fn test_writes_records() {
        let records = Synthesizer::with_source(ScriptedDigits::new("0"))
            .batch("400000", 8, 2)
            .unwrap();

        let mut buffer = Vec::new();
        RecordWriter::new(&mut buffer).write_records(&records).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "index,prefix,number\n1,400000,40000002\n2,400000,40000002\n"
        );
    }
}
