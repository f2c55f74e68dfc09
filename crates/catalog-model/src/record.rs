//! Program records.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::fields;

/// One catalog entry: column name to raw value.
///
/// Values are kept exactly as read. A column missing from the map is
/// treated as empty when written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `column`, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Returns the value of `column`, or `""` when absent.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Sets `column` to `value`, returning the previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(column.into(), value.into())
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.values.remove(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn id(&self) -> &str {
        self.get_or_empty(fields::ID)
    }

    pub fn name(&self) -> &str {
        self.get_or_empty(fields::NAME)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values in the given column order, absent columns as `""`.
    pub fn values_in<'a>(&'a self, columns: &'a [String]) -> impl Iterator<Item = &'a str> {
        columns.iter().map(|column| self.get_or_empty(column))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A record tagged with the data file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedRecord {
    pub source: PathBuf,
    pub record: Record,
}

impl SourcedRecord {
    pub fn new(source: impl Into<PathBuf>, record: Record) -> Self {
        Self {
            source: source.into(),
            record,
        }
    }
}
