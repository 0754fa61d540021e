use crate::utils::{LocalizationGenError, Result};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One CSV record as raw field strings.
pub type Row = Vec<String>;

pub struct CsvRowReader {
    path: PathBuf,
}

impl CsvRowReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every record in file order. The first record is returned like any
    /// other; callers decide whether it is a header.
    ///
    /// Blank lines come back as empty rows so that row indices line up with
    /// the lines of the file.
    pub fn read_rows(&self) -> Result<Vec<Row>> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| LocalizationGenError::from_input_io(&self.path, e))?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
        std::str::from_utf8(body).map_err(|e| LocalizationGenError::InputUnreadable {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(body);

        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        let mut consumed = 0;
        while reader.read_record(&mut record)? {
            rows.extend(std::iter::repeat_with(Row::new).take(blank_lines(body, consumed)));
            rows.push(record.iter().map(|s| s.to_string()).collect());
            consumed = reader.position().byte() as usize;
        }
        rows.extend(std::iter::repeat_with(Row::new).take(blank_lines(body, consumed)));

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "Read CSV rows");
        Ok(rows)
    }

    pub fn file_size(&self) -> Result<u64> {
        get_file_size(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Counts the empty lines starting at `from`. A `\n` finishing a `\r\n`
/// terminator of the previous record is not a line of its own.
fn blank_lines(body: &[u8], from: usize) -> usize {
    let mut rest = body.get(from..).unwrap_or_default();
    if from > 0 && body[from - 1] == b'\r' {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }

    let mut count = 0;
    loop {
        rest = if let Some(tail) = rest.strip_prefix(b"\r\n") {
            tail
        } else if let Some(tail) = rest.strip_prefix(b"\n").or_else(|| rest.strip_prefix(b"\r")) {
            tail
        } else {
            return count;
        };
        count += 1;
    }
}

pub fn get_file_size(path: &Path) -> Result<u64> {
    let metadata =
        std::fs::metadata(path).map_err(|e| LocalizationGenError::from_input_io(path, e))?;
    Ok(metadata.len())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    fn read(contents: &str) -> Vec<Row> {
        let file = write_csv(contents.as_bytes());
        CsvRowReader::new(file.path()).read_rows().unwrap()
    }

    #[test]
    fn reads_header_as_first_row() {
        let rows = read("key,singular,p1,p2,p3\nA,a,,,\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["key", "singular", "p1", "p2", "p3"]);
        assert_eq!(rows[1], vec!["A", "a", "", "", ""]);
    }

    #[test]
    fn tolerates_uneven_rows() {
        let rows = read("h1,h2\nA,a,b,c,d,e\nB\n");
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 6, 1]);
    }

    #[test]
    fn keeps_quoted_fields_raw() {
        let rows = read("h\nK,\"Bye \"\"now\"\"\",\"two\nlines\",,\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "Bye \"now\"");
        assert_eq!(rows[1][2], "two\nlines");
    }

    #[test]
    fn blank_lines_are_empty_rows() {
        let rows = read("\nKEY,v,p1,p2,p3\n\nA,a,,,\n\n");

        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![0, 5, 0, 5, 0]);
        assert_eq!(rows[1][0], "KEY");
        assert_eq!(rows[3][0], "A");
    }

    #[test]
    fn crlf_terminators_add_no_rows() {
        let rows = read("h,h,h,h,h\r\nA,a,,,\r\nB,b,,,\r\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], "B");

        let rows = read("h\r\n\r\nA,a,,,\r\n");
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 0, 5]);
    }

    #[test]
    fn missing_final_newline_adds_no_row() {
        assert_eq!(read("h\nA,a,,,").len(), 2);
    }

    #[test]
    fn leading_bom_is_not_part_of_first_field() {
        let rows = read("\u{FEFF}key,singular,p1,p2,p3\nA,a,,,\n");
        assert_eq!(rows[0][0], "key");
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let file = write_csv(b"h\nA,\xff\xfe,,,\n");

        let err = CsvRowReader::new(file.path()).read_rows().unwrap_err();
        assert!(matches!(err, LocalizationGenError::InputUnreadable { .. }));
    }

    #[test]
    fn file_size_is_exact_byte_length() {
        let contents = "\u{FEFF}h\nK,Größe,,,\n";
        let file = write_csv(contents.as_bytes());

        assert_eq!(
            CsvRowReader::new(file.path()).file_size().unwrap(),
            contents.len() as u64
        );
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let reader = CsvRowReader::new("/nonexistent/GARbro.en-US.csv");

        assert!(matches!(
            reader.read_rows(),
            Err(LocalizationGenError::InputNotFound(_))
        ));
        assert!(matches!(
            reader.file_size(),
            Err(LocalizationGenError::InputNotFound(_))
        ));
        assert!(!file_exists(reader.path()));
    }
}
