use crate::application::synthesizer::SyntheticRecord;
use crate::error::Result;
use std::io::Write;

/// Writes synthetic records as a pretty-printed JSON array.
pub struct JsonRecordWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonRecordWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_records(&mut self, records: &[SyntheticRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, records)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
