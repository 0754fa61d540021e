use crate::codegen::entry::LocalizationEntry;
use crate::csv_processor::Row;
use crate::utils::{CommaPolicy, GeneratorConfig, LocalizationGenError, Result, TemplateConfig};

const ENTRY_INDENT: &str = "                ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,
    /// Source rows, header and skipped rows included.
    pub rows: usize,
    pub entries: usize,
    pub skipped: usize,
    pub size_constant: u64,
}

pub struct TemplateEmitter<'a> {
    template: &'a TemplateConfig,
    comma_policy: CommaPolicy,
    strict: bool,
}

impl<'a> TemplateEmitter<'a> {
    pub fn new(template: &'a TemplateConfig, generator: &GeneratorConfig) -> Self {
        Self {
            template,
            comma_policy: generator.comma_policy,
            strict: generator.strict,
        }
    }

    pub fn render(&self, rows: &[Row], file_size: u64) -> Result<RenderedDocument> {
        if file_size > i32::MAX as u64 {
            return Err(LocalizationGenError::SizeOverflow { size: file_size });
        }

        let last_index = self.last_comma_free_index(rows);

        let mut text = self.preamble(file_size);
        let mut entries = 0;
        let mut skipped = 0;

        for (i, row) in rows.iter().enumerate() {
            if i == 0 {
                continue;
            }

            let Some(entry) = LocalizationEntry::from_row(row) else {
                if self.strict {
                    tracing::warn!(index = i, fields = row.len(), "Short row in strict mode");
                    return Err(LocalizationGenError::ShortRow {
                        index: i,
                        fields: row.len(),
                    });
                }
                tracing::debug!(index = i, fields = row.len(), "Skipping short row");
                skipped += 1;
                continue;
            };

            text.push_str(ENTRY_INDENT);
            text.push_str(&entry.render(&self.template.entry_type));
            if Some(i) != last_index {
                text.push(',');
            }
            text.push('\n');
            entries += 1;
        }

        text.push_str("            });\n    }\n}");

        Ok(RenderedDocument {
            text,
            rows: rows.len(),
            entries,
            skipped,
            size_constant: file_size,
        })
    }

    fn last_comma_free_index(&self, rows: &[Row]) -> Option<usize> {
        match self.comma_policy {
            CommaPolicy::SourceIndex => rows.len().checked_sub(1),
            CommaPolicy::LastEmitted => rows
                .iter()
                .enumerate()
                .skip(1)
                .filter(|(_, row)| LocalizationEntry::from_row(row).is_some())
                .map(|(i, _)| i)
                .last(),
        }
    }

    fn preamble(&self, file_size: u64) -> String {
        let class_name = &self.template.class_name;
        let entry_type = &self.template.entry_type;

        let mut text = String::new();
        text.push_str("using System.Collections.Concurrent;\n");
        text.push_str("using System.Collections.Generic;\n\n");
        text.push_str(&format!("public static partial class {}\n{{\n", class_name));
        text.push_str(&format!(
            "    private static readonly ConcurrentDictionary<string, {}> _csvResources = InitializeResources();\n\n",
            entry_type
        ));
        text.push_str(&format!(
            "    private const int {} = {}; // Only load {} if the size is not this\n\n",
            self.template.size_constant, file_size, self.template.default_csv_name
        ));
        text.push_str(&format!(
            "    private static ConcurrentDictionary<string, {}> InitializeResources()\n    {{\n",
            entry_type
        ));
        text.push_str(&format!(
            "        return new ConcurrentDictionary<string, {}>(\n",
            entry_type
        ));
        text.push_str(&format!(
            "            new Dictionary<string, {}> {{\n",
            entry_type
        ));
        text
    }
}

pub fn render_document(
    rows: &[Row],
    file_size: u64,
    template: &TemplateConfig,
    generator: &GeneratorConfig,
) -> Result<RenderedDocument> {
    TemplateEmitter::new(template, generator).render(rows, file_size)
}
