use crate::codegen::{render_document, RenderedDocument};
use crate::csv_processor::{CsvRowReader, SourceFileWriter};
use crate::utils::{AppConfig, LocalizationGenError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    /// Source rows read, header and skipped rows included.
    pub rows: usize,
    pub entries: usize,
    pub skipped: usize,
    pub size_constant: u64,
}

impl GenerationReport {
    fn new(output_path: &Path, document: &RenderedDocument) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            rows: document.rows,
            entries: document.entries,
            skipped: document.skipped,
            size_constant: document.size_constant,
        }
    }

    /// Operator summary printed after a successful run.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} with {} entries\nFile size constant set to: {}",
            self.output_path.display(),
            self.rows,
            self.size_constant
        )
    }
}

/// Reads the input CSV and renders the document without touching the output.
pub fn render_from_csv(csv_path: &Path, config: &AppConfig) -> Result<RenderedDocument> {
    let reader = CsvRowReader::new(csv_path);

    let rows = reader.read_rows()?;
    let file_size = reader.file_size()?;

    render_document(&rows, file_size, &config.template, &config.generator)
}

/// Runs the full pipeline: read, render, then overwrite `output_path`.
pub fn generate_localization(
    csv_path: &Path,
    output_path: &Path,
    config: &AppConfig,
) -> Result<GenerationReport> {
    let document = render_from_csv(csv_path, config)?;

    let writer = SourceFileWriter::new(output_path);
    writer.write_document(&document.text)?;

    let report = GenerationReport::new(writer.path(), &document);
    tracing::info!(
        path = %report.output_path.display(),
        rows = report.rows,
        entries = report.entries,
        skipped = report.skipped,
        size = report.size_constant,
        "Generated localization table"
    );
    Ok(report)
}

/// Verifies that `output_path` already holds what generation would write.
pub fn check_localization(
    csv_path: &Path,
    output_path: &Path,
    config: &AppConfig,
) -> Result<GenerationReport> {
    let document = render_from_csv(csv_path, config)?;

    let writer = SourceFileWriter::new(output_path);
    match writer.read_existing()? {
        Some(existing) if existing == document.text.as_bytes() => {
            tracing::info!(path = %writer.path().display(), "Generated localization table is up to date");
            Ok(GenerationReport::new(writer.path(), &document))
        }
        _ => {
            tracing::warn!(path = %writer.path().display(), "Generated localization table is stale");
            Err(LocalizationGenError::OutputStale(writer.path().to_path_buf()))
        }
    }
}
