//! In-memory form of one CSV data file.

use crate::record::Record;

/// Record terminator used when a file is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\r\n`, what the catalog tooling has always written.
    #[default]
    Crlf,
    /// `\n`
    Lf,
}

/// Physical details of a data file that the records do not capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileLayout {
    /// File started with a UTF-8 byte order mark.
    pub bom: bool,
    pub terminator: LineTerminator,
}

/// Columns and records of one data file.
///
/// `columns` is the header order; it is the order values are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFile {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
    pub layout: FileLayout,
}

impl DataFile {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
            layout: FileLayout::default(),
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Row index of the first record whose id equals `id` exactly.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Number of records whose id equals `id`.
    pub fn count_of(&self, id: &str) -> usize {
        self.records.iter().filter(|r| r.id() == id).count()
    }

    /// Removes every record whose id equals `id`, returning how many went.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        before - self.records.len()
    }
}
