pub mod codegen;
pub mod csv_processor;
pub mod pipeline;
pub mod utils;

pub use codegen::{escape_literal, render_document, LocalizationEntry, RenderedDocument};
pub use csv_processor::{CsvRowReader, Row, SourceFileWriter};
pub use pipeline::{check_localization, generate_localization, render_from_csv, GenerationReport};
pub use utils::{AppConfig, CommaPolicy, LocalizationGenError, Result};
