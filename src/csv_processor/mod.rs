pub mod reader;
pub mod writer;

pub use reader::{file_exists, get_file_size, CsvRowReader, Row};
pub use writer::SourceFileWriter;
