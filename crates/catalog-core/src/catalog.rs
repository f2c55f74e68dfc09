//! Catalog operations.
//!
//! Every operation discovers and reads the data files fresh; nothing is
//! cached between calls. Writes replace a whole data file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use catalog_ingest::{discover_files, load_data_file, save_data_file};
use catalog_model::{DataFile, Record, SourcedRecord, fields};
use catalog_validate::Validator;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::stats::{Statistics, tally};

/// A record found by id, together with the file it lives in.
#[derive(Debug, Clone)]
pub struct Located {
    pub path: PathBuf,
    /// The whole data file, unfiltered.
    pub file: DataFile,
    /// Row index of the matched record within `file.records`.
    pub index: usize,
}

impl Located {
    pub fn record(&self) -> &Record {
        &self.file.records[self.index]
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.file.records[self.index]
    }
}

/// Entry point for all catalog operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    validator: Validator,
}

impl Catalog {
    /// Open a catalog rooted at `config.base_dir`, which must exist.
    pub fn open(config: CatalogConfig) -> Result<Self> {
        if !config.base_dir.is_dir() {
            return Err(CatalogError::MissingBaseDir {
                path: config.base_dir.clone(),
            });
        }
        let validator = Validator::new(config.modalities.clone());
        Ok(Self { config, validator })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Data files under the base directory, in discovery order.
    pub fn files(&self) -> Vec<PathBuf> {
        discover_files(&self.config.base_dir, &self.config.extension)
    }

    pub fn load(&self, path: &Path) -> Result<DataFile> {
        Ok(load_data_file(path)?)
    }

    fn load_all(&self) -> Result<Vec<(PathBuf, DataFile)>> {
        self.files()
            .into_iter()
            .map(|path| {
                let file = self.load(&path)?;
                Ok((path, file))
            })
            .collect()
    }

    /// Every record of every data file, tagged with its source path.
    pub fn list_all(&self) -> Result<Vec<SourcedRecord>> {
        let mut all = Vec::new();
        for (path, file) in self.load_all()? {
            all.extend(
                file.records
                    .into_iter()
                    .map(|record| SourcedRecord::new(path.clone(), record)),
            );
        }
        debug!(records = all.len(), "listed catalog");
        Ok(all)
    }

    /// First record whose id equals `id`, scanning files in discovery
    /// order and rows in file order.
    pub fn find_by_key(&self, id: &str) -> Result<Option<Located>> {
        for path in self.files() {
            let file = self.load(&path)?;
            let Some(index) = file.position_of(id) else {
                continue;
            };
            let copies = file.count_of(id);
            if copies > 1 {
                warn!(id, path = %path.display(), copies, "duplicate id, using first match");
            }
            return Ok(Some(Located { path, file, index }));
        }
        Ok(None)
    }

    fn require(&self, id: &str) -> Result<Located> {
        self.find_by_key(id)?.ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Validate `record` and append it to the data file at `path`.
    pub fn add(&self, path: &Path, record: Record) -> Result<()> {
        let span = info_span!("add", path = %path.display());
        let _guard = span.enter();

        let mut file = self.load(path)?;
        self.validator.validate(&record)?;
        let id = record.id().to_string();
        file.records.push(record);
        save_data_file(path, &file)?;

        info!(id = %id, records = file.len(), "record added");
        Ok(())
    }

    /// Apply `changes` to the record with `id` and write its file back.
    ///
    /// Blank replacement values and the id column are ignored, as are
    /// columns the file does not have. The edited record must still pass
    /// validation; otherwise nothing is written.
    pub fn edit(&self, id: &str, changes: &BTreeMap<String, String>) -> Result<Located> {
        let span = info_span!("edit", id);
        let _guard = span.enter();

        let mut located = self.require(id)?;
        let columns = located.file.columns.clone();
        let record = located.record_mut();
        for column in columns.iter().filter(|c| c.as_str() != fields::ID) {
            if let Some(value) = changes.get(column).filter(|v| !v.is_empty()) {
                record.set(column.as_str(), value.as_str());
            }
        }

        self.validator.validate(located.record())?;
        save_data_file(&located.path, &located.file)?;

        info!(path = %located.path.display(), "record updated");
        Ok(located)
    }

    /// Remove every record with `id` from the file holding its first match.
    ///
    /// Returns the number of records removed. Without confirmation nothing
    /// is written.
    pub fn delete(&self, id: &str, confirmed: bool) -> Result<usize> {
        let span = info_span!("delete", id);
        let _guard = span.enter();

        let Located { path, mut file, .. } = self.require(id)?;
        if !confirmed {
            return Err(CatalogError::UserCancelled);
        }
        let removed = file.remove_by_id(id);
        save_data_file(&path, &file)?;

        info!(path = %path.display(), removed, "record deleted");
        Ok(removed)
    }

    /// Count, quota total, and duration sum across all data files, using the
    /// configured aggregation policy.
    pub fn statistics(&self) -> Result<Statistics> {
        let policy = self.config.policy;
        let mut stats = Statistics::default();
        for (path, file) in self.load_all()? {
            let file_tally = tally(&file.records, policy);
            if file_tally.malformed > 0 {
                debug!(
                    path = %path.display(),
                    malformed = file_tally.malformed,
                    ?policy,
                    "records with non-integer duration or quota"
                );
            }
            stats.push_file(path, file_tally);
        }
        Ok(stats)
    }

    /// Merge all records into one data file: the columns of the first file
    /// that has a header, plus a `source_file` column naming each record's
    /// origin.
    ///
    /// Headerless (empty) files are skipped when picking the columns.
    /// Columns that exist only in later files are not carried over.
    pub fn consolidate(&self) -> Result<DataFile> {
        let mut columns: Option<Vec<String>> = None;
        let mut records = Vec::new();
        for (path, file) in self.load_all()? {
            if columns.is_none() && !file.columns.is_empty() {
                columns = Some(file.columns.clone());
            }
            let source = path.display().to_string();
            records.extend(file.records.into_iter().map(|mut record| {
                record.set(fields::SOURCE_FILE, source.as_str());
                record
            }));
        }

        if records.is_empty() {
            return Err(CatalogError::NothingToDo {
                what: "no records to export",
            });
        }

        let mut columns = columns.unwrap_or_default();
        columns.push(fields::SOURCE_FILE.to_string());
        Ok(DataFile::new(columns).with_records(records))
    }

    /// Write a consolidated file to `output`.
    pub fn write_export(&self, output: &Path, consolidated: &DataFile) -> Result<()> {
        save_data_file(output, consolidated)?;
        info!(
            path = %output.display(),
            records = consolidated.len(),
            "exported consolidated catalog"
        );
        Ok(())
    }

    /// Consolidate and write in one step; returns the number of rows written.
    pub fn export(&self, output: &Path) -> Result<usize> {
        let consolidated = self.consolidate()?;
        self.write_export(output, &consolidated)?;
        Ok(consolidated.len())
    }
}
