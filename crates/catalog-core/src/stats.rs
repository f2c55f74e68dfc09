//! Aggregate statistics over catalog records.
//!
//! The catalog counts programs, sums the annual quota, and averages the
//! duration. Rows with malformed numbers are handled by an explicit
//! [`AggregationPolicy`] rather than a blanket skip, so the choice is
//! visible and testable.

use std::path::PathBuf;

use catalog_model::{Record, fields};
use catalog_validate::parse_integer;

/// How records with non-integer duration or quota are aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationPolicy {
    /// Historical behaviour of the catalog tool. Every record is counted.
    /// The quota is summed when it parses; the duration is summed only when
    /// both fields parse (quota was always read first, so a bad duration
    /// left the quota already added). A column absent from the file's
    /// header counts as zero; an empty value is malformed.
    #[default]
    LegacyParity,

    /// Every record is counted; a record with either field malformed adds
    /// to neither sum.
    CountAllSkipInvalidSums,

    /// Records with either field malformed are neither counted nor summed.
    SkipInvalidRecords,
}

/// Running totals for a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub records: usize,
    /// Saturates instead of overflowing.
    pub total_quota: i128,
    /// Saturates instead of overflowing.
    pub duration_sum: i128,
    /// Records with a malformed duration or quota, whatever the policy did
    /// with them.
    pub malformed: usize,
}

impl Tally {
    pub fn add(&mut self, record: &Record, policy: AggregationPolicy) {
        let quota = numeric_field(record, fields::ANNUAL_QUOTA);
        let duration = numeric_field(record, fields::DURATION_YEARS);
        if quota.is_none() || duration.is_none() {
            self.malformed += 1;
        }

        match policy {
            AggregationPolicy::LegacyParity => {
                self.records += 1;
                if let Some(quota) = quota {
                    self.total_quota = self.total_quota.saturating_add(quota);
                    if let Some(duration) = duration {
                        self.duration_sum = self.duration_sum.saturating_add(duration);
                    }
                }
            }
            AggregationPolicy::CountAllSkipInvalidSums => {
                self.records += 1;
                if let (Some(quota), Some(duration)) = (quota, duration) {
                    self.total_quota = self.total_quota.saturating_add(quota);
                    self.duration_sum = self.duration_sum.saturating_add(duration);
                }
            }
            AggregationPolicy::SkipInvalidRecords => {
                if let (Some(quota), Some(duration)) = (quota, duration) {
                    self.records += 1;
                    self.total_quota = self.total_quota.saturating_add(quota);
                    self.duration_sum = self.duration_sum.saturating_add(duration);
                }
            }
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        self.records += other.records;
        self.total_quota = self.total_quota.saturating_add(other.total_quota);
        self.duration_sum = self.duration_sum.saturating_add(other.duration_sum);
        self.malformed += other.malformed;
    }

    /// Duration sum divided by record count; `None` when nothing counted.
    pub fn mean_duration(&self) -> Option<f64> {
        if self.records == 0 {
            None
        } else {
            Some(self.duration_sum as f64 / self.records as f64)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

/// Totals for one data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatistics {
    pub path: PathBuf,
    pub tally: Tally,
}

/// Catalog-wide totals plus a per-file breakdown in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub totals: Tally,
    pub files: Vec<FileStatistics>,
}

impl Statistics {
    pub fn push_file(&mut self, path: PathBuf, tally: Tally) {
        self.totals.merge(&tally);
        self.files.push(FileStatistics { path, tally });
    }

    pub fn mean_duration(&self) -> Option<f64> {
        self.totals.mean_duration()
    }
}

/// Tally `records` under `policy`.
pub fn tally<'a, I>(records: I, policy: AggregationPolicy) -> Tally
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut tally = Tally::default();
    for record in records {
        tally.add(record, policy);
    }
    tally
}

/// Loaded records carry every header column, so `None` from `get` means
/// the file has no such column at all.
fn numeric_field(record: &Record, column: &str) -> Option<i128> {
    match record.get(column) {
        None => Some(0),
        Some(value) => parse_integer(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(duration: &str, quota: &str) -> Record {
        [("duracion_anios", duration), ("cupos_anuales", quota)]
            .into_iter()
            .collect()
    }

    fn mixed() -> Vec<Record> {
        vec![rec("3", "30"), rec("x", "20"), rec("4", "10")]
    }

    fn mean_2dp(tally: &Tally) -> String {
        format!("{:.2}", tally.mean_duration().unwrap())
    }

    #[test]
    fn legacy_parity_keeps_quota_of_bad_duration() {
        let t = tally(&mixed(), AggregationPolicy::LegacyParity);
        assert_eq!(t.records, 3);
        assert_eq!(t.total_quota, 60);
        assert_eq!(t.duration_sum, 7);
        assert_eq!(t.malformed, 1);
        assert_eq!(mean_2dp(&t), "2.33");
    }

    #[test]
    fn legacy_parity_bad_quota_skips_both() {
        let t = tally(&[rec("5", "n/a"), rec("2", "10")], AggregationPolicy::LegacyParity);
        assert_eq!(t.records, 2);
        assert_eq!(t.total_quota, 10);
        assert_eq!(t.duration_sum, 2);
        assert_eq!(mean_2dp(&t), "1.00");
    }

    #[test]
    fn count_all_skip_invalid_sums() {
        let t = tally(&mixed(), AggregationPolicy::CountAllSkipInvalidSums);
        assert_eq!(t.records, 3);
        assert_eq!(t.total_quota, 40);
        assert_eq!(mean_2dp(&t), "2.33");
    }

    #[test]
    fn skip_invalid_records() {
        let t = tally(&mixed(), AggregationPolicy::SkipInvalidRecords);
        assert_eq!(t.records, 2);
        assert_eq!(t.total_quota, 40);
        assert_eq!(mean_2dp(&t), "3.50");
    }

    #[test]
    fn empty_values_are_malformed() {
        // A short row loads with empty trailing values.
        let short = rec("5", "");
        let t = tally(&[short, rec("1", "10")], AggregationPolicy::LegacyParity);
        assert_eq!(t.records, 2);
        assert_eq!(t.total_quota, 10);
        assert_eq!(t.duration_sum, 1);
        assert_eq!(t.malformed, 1);
        assert_eq!(mean_2dp(&t), "0.50");
    }

    #[test]
    fn sums_do_not_overflow() {
        let max = i64::MAX.to_string();
        let t = tally(
            &[rec("1", &max), rec("1", "1")],
            AggregationPolicy::LegacyParity,
        );
        assert_eq!(t.total_quota, i128::from(i64::MAX) + 1);

        let huge = i128::MAX.to_string();
        let mut t = tally(&[rec(&huge, &huge)], AggregationPolicy::LegacyParity);
        t.merge(&tally(&[rec(&huge, &huge)], AggregationPolicy::LegacyParity));
        assert_eq!(t.total_quota, i128::MAX);
        assert_eq!(t.duration_sum, i128::MAX);
        assert_eq!(t.records, 2);
    }

    #[test]
    fn columns_absent_from_header_count_as_zero() {
        let record: Record = [("id", "1")].into_iter().collect();
        let t = tally([&record], AggregationPolicy::LegacyParity);
        assert_eq!(t.records, 1);
        assert_eq!(t.malformed, 0);
        assert_eq!(t.total_quota, 0);
    }

    #[test]
    fn empty_has_no_mean() {
        let t = tally(&Vec::<Record>::new(), AggregationPolicy::LegacyParity);
        assert!(t.is_empty());
        assert_eq!(t.mean_duration(), None);
    }
}
