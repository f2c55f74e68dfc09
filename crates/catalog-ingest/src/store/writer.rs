//! CSV data file saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use catalog_model::{DataFile, LineTerminator};

use super::reader::UTF8_BOM;
use crate::error::{IngestError, Result};

/// Encodes a data file: header from `columns`, then one row per record with
/// values in column order. Absent values are written as empty fields.
pub fn encode_data_file(file: &DataFile) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut out = Vec::new();
    if file.layout.bom {
        out.extend_from_slice(UTF8_BOM);
    }
    if file.columns.is_empty() {
        return Ok(out);
    }

    let terminator = match file.layout.terminator {
        LineTerminator::Crlf => Terminator::CRLF,
        LineTerminator::Lf => Terminator::Any(b'\n'),
    };
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator)
        .from_writer(out);

    writer.write_record(&file.columns)?;
    for record in &file.records {
        writer.write_record(record.values_in(&file.columns))?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Saves a data file, fully replacing the target.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written data file behind.
pub fn save_data_file(path: &Path, file: &DataFile) -> Result<()> {
    let bytes = encode_data_file(file).map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Create parent directory if needed
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            operation: "create directory for",
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);

    let mut out = File::create(&temp_path).map_err(|e| IngestError::FileWrite {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    out.write_all(&bytes).map_err(|e| IngestError::FileWrite {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    out.sync_all().map_err(|e| IngestError::FileWrite {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(out);

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IngestError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!(
        path = %path.display(),
        records = file.len(),
        "saved data file"
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
