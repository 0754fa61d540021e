use crate::codegen::escape::escape_literal;
use crate::csv_processor::Row;

/// Fields a data row must have: key, singular, three plurals.
pub const MIN_ROW_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationEntry {
    /// Lookup key, emitted verbatim.
    pub key: String,
    pub singular: String,
    pub plural1: Option<String>,
    pub plural2: Option<String>,
    pub plural3: Option<String>,
}

impl LocalizationEntry {
    /// Builds an entry from a data row, or `None` if the row is too short.
    pub fn from_row(row: &Row) -> Option<Self> {
        if row.len() < MIN_ROW_FIELDS {
            return None;
        }

        Some(Self {
            key: row[0].clone(),
            singular: escape_literal(row[1].as_str()),
            plural1: optional_plural(&row[2]),
            plural2: optional_plural(&row[3]),
            plural3: optional_plural(&row[4]),
        })
    }

    /// Renders the `{ "key", new T { ... } }` initializer pair.
    pub fn render(&self, entry_type: &str) -> String {
        let mut parts = vec![format!("Singular = \"{}\"", self.singular)];

        let plurals = [
            ("Plural1", &self.plural1),
            ("Plural2", &self.plural2),
            ("Plural3", &self.plural3),
        ];
        for (name, value) in plurals {
            if let Some(value) = value {
                parts.push(format!("{} = \"{}\"", name, value));
            }
        }

        format!(
            "{{ \"{}\", new {} {{ {} }} }}",
            self.key,
            entry_type,
            parts.join(", ")
        )
    }
}

fn optional_plural(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(escape_literal(raw))
    }
}
