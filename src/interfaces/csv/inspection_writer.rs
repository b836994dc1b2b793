use crate::application::inspector::Inspection;
use crate::error::Result;
use std::io::Write;

/// Writes inspection results as CSV with the header
/// `input,digits,valid,expected_check_digit`.
///
/// A missing verdict or check digit is written as an empty field.
pub struct InspectionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> InspectionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, inspection: &Inspection) -> Result<()> {
        self.writer.serialize(inspection)?;
        Ok(())
    }

    pub fn write_all<I>(&mut self, inspections: I) -> Result<()>
    where
        I: IntoIterator<Item = Inspection>,
    {
        for inspection in inspections {
            self.write(&inspection)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::inspector::inspect;

    fn render(inputs: &[&str]) -> String {
        let mut buffer = Vec::new();
        InspectionWriter::new(&mut buffer)
            .write_all(inputs.iter().map(|input| inspect(input)))
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_writes_header_and_rows() {
        let output = render(&["79927398713", "79927398710"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "input,digits,valid,expected_check_digit");
        assert_eq!(lines[1], "79927398713,79927398713,true,3");
        assert_eq!(lines[2], "79927398710,79927398710,false,3");
    }

    #[test]
    fn test_quotes_formatted_input_and_blanks_missing_verdict() {
        let output = render(&["7992 7398, 713", "5"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "\"7992 7398, 713\",79927398713,true,3");
        assert_eq!(lines[2], "5,5,,");
    }
}
