//! CSV data file loading.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use catalog_model::{DataFile, FileLayout, LineTerminator, Record};

use crate::error::{IngestError, Result};

pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads a data file: header row as columns, each further row as a record.
///
/// Every record carries every header column: rows shorter than the header
/// read their missing trailing values as `""`. Values past the last header
/// column have nowhere to go and are dropped.
pub fn load_data_file(path: &Path) -> Result<DataFile> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_data_file(&bytes, path)
}

/// Parses data file contents already in memory. `path` is used for errors
/// and logging only.
pub fn parse_data_file(bytes: &[u8], path: &Path) -> Result<DataFile> {
    let (bom, body) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (true, rest),
        None => (false, bytes),
    };
    let layout = FileLayout {
        bom,
        terminator: detect_terminator(body),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::from_csv_read(path.to_path_buf(), e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    let mut overlong_rows = 0usize;
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::from_csv_read(path.to_path_buf(), e))?;
        if row.len() > columns.len() {
            overlong_rows += 1;
        }
        let record: Record = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| (column.as_str(), row.get(idx).unwrap_or_default()))
            .collect();
        records.push(record);
    }

    if overlong_rows > 0 {
        warn!(
            path = %path.display(),
            rows = overlong_rows,
            "rows have more values than header columns; extra values dropped"
        );
    }
    debug!(
        path = %path.display(),
        columns = columns.len(),
        records = records.len(),
        "loaded data file"
    );

    Ok(DataFile {
        columns,
        records,
        layout,
    })
}

/// Terminator of the first line; files without one get the default.
fn detect_terminator(body: &[u8]) -> LineTerminator {
    match body.iter().position(|&b| b == b'\n') {
        Some(idx) if idx > 0 && body[idx - 1] == b'\r' => LineTerminator::Crlf,
        Some(_) => LineTerminator::Lf,
        None => LineTerminator::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_load_header_and_rows() {
        let file = create_temp_csv(b"id,nombre_carrera\r\n1,Medicina\r\n2,\"Letras, Artes\"\r\n");
        let data = load_data_file(file.path()).unwrap();

        assert_eq!(data.columns, vec!["id", "nombre_carrera"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.records[1].name(), "Letras, Artes");
        assert_eq!(data.layout.terminator, LineTerminator::Crlf);
        assert!(!data.layout.bom);
    }

    #[test]
    fn test_short_rows_read_missing_values_as_empty() {
        let file = create_temp_csv(b"id,a,b\n1\n2,x,y,z\n");
        let data = load_data_file(file.path()).unwrap();

        assert_eq!(data.layout.terminator, LineTerminator::Lf);
        assert_eq!(data.records[0].get("a"), Some(""));
        assert_eq!(data.records[0].get("b"), Some(""));
        assert_eq!(data.records[0].len(), 3);
        assert_eq!(data.records[1].get("b"), Some("y"));
        assert_eq!(data.records[1].len(), 3);
    }

    #[test]
    fn test_bom_is_stripped_and_remembered() {
        let file = create_temp_csv(b"\xEF\xBB\xBFid,x\n1,2\n");
        let data = load_data_file(file.path()).unwrap();

        assert_eq!(data.columns[0], "id");
        assert!(data.layout.bom);
    }

    #[test]
    fn test_empty_file_has_no_columns() {
        let file = create_temp_csv(b"");
        let data = load_data_file(file.path()).unwrap();

        assert!(data.columns.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let file = create_temp_csv(b"id,nombre\n1,\xFF\xFE\n");
        let result = load_data_file(file.path());

        assert!(matches!(result, Err(IngestError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_data_file(&dir.path().join("missing.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
