pub mod inspection_writer;
pub mod number_reader;
pub mod record_writer;
