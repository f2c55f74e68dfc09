//! Interpretation of raw user input and record rendering.

use std::path::PathBuf;

use catalog_model::{Record, SourcedRecord, fields, title_case};

use crate::error::{CatalogError, Result};

/// Resolve a 1-based file choice against `files`.
///
/// Empty input cancels. Anything that is not a listed number (including
/// `0` and negatives) is an invalid selection.
pub fn select_file(files: &[PathBuf], input: &str) -> Result<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CatalogError::UserCancelled);
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| files.get(idx))
        .cloned()
        .ok_or_else(|| CatalogError::InvalidSelection {
            input: input.to_string(),
        })
}

/// True when `answer` confirms a destructive action (`s`, `y`, `yes`).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "s" | "y" | "yes")
}

/// Modality values typed by the user are stored title-cased.
pub fn normalize_modality(value: &str) -> String {
    title_case(value.trim())
}

/// A record with every column of the file present and empty.
pub fn blank_record(columns: &[String]) -> Record {
    columns.iter().map(|c| (c.as_str(), "")).collect()
}

/// One listing line: `id | Name | N years | Q seats | modality | path`.
pub fn format_listing_line(entry: &SourcedRecord) -> String {
    let record = &entry.record;
    format!(
        "{} | {} | {} years | {} seats | {} | {}",
        record.id(),
        title_case(record.name()),
        record.get_or_empty(fields::DURATION_YEARS),
        record.get_or_empty(fields::ANNUAL_QUOTA),
        record.get_or_empty(fields::MODALITY),
        entry.source.display()
    )
}
