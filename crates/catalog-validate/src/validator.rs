//! Record validation against catalog domain rules.

use std::num::IntErrorKind;

use tracing::debug;

use catalog_model::{ModalitySet, Record, fields};

use crate::issue::ValidationIssue;

/// Parses an integer field the way the catalog always has: surrounding
/// whitespace and a leading sign are accepted. Values outside the `i128`
/// range yield `None`.
pub fn parse_integer(value: &str) -> Option<i128> {
    read_integer(value).ok()
}

fn read_integer(value: &str) -> Result<i128, IntErrorKind> {
    value.trim().parse::<i128>().map_err(|e| e.kind().clone())
}

fn is_overflow(kind: &IntErrorKind) -> bool {
    matches!(kind, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow)
}

/// Checks records against the catalog rules.
///
/// Rules run in a fixed order and the first failure is reported:
///
/// 1. duration and quota are written as integers
/// 2. both fit in an `i128`
/// 3. both are greater than zero
/// 4. modality is one of the accepted strings (exact match)
/// 5. id and name are not blank
///
/// Columns not named by a rule are never inspected.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    modalities: ModalitySet,
}

impl Validator {
    pub fn new(modalities: ModalitySet) -> Self {
        Self { modalities }
    }

    pub fn modalities(&self) -> &ModalitySet {
        &self.modalities
    }

    pub fn validate(&self, record: &Record) -> Result<(), ValidationIssue> {
        let result = self.check(record);
        if let Err(issue) = &result {
            debug!(id = record.id(), code = issue.code(), "record rejected");
        }
        result
    }

    fn check(&self, record: &Record) -> Result<(), ValidationIssue> {
        let duration_raw = record.get_or_empty(fields::DURATION_YEARS);
        let quota_raw = record.get_or_empty(fields::ANNUAL_QUOTA);

        let (duration, quota) = match (read_integer(duration_raw), read_integer(quota_raw)) {
            (Ok(duration), Ok(quota)) => (duration, quota),
            (duration, quota) => {
                let malformed = [&duration, &quota]
                    .into_iter()
                    .any(|parsed| matches!(parsed, Err(kind) if !is_overflow(kind)));
                return Err(if malformed {
                    ValidationIssue::NotIntegers {
                        duration: duration_raw.to_string(),
                        quota: quota_raw.to_string(),
                    }
                } else {
                    ValidationIssue::OutOfRange {
                        duration: duration_raw.trim().to_string(),
                        quota: quota_raw.trim().to_string(),
                    }
                });
            }
        };

        if duration <= 0 || quota <= 0 {
            return Err(ValidationIssue::NotPositive { duration, quota });
        }

        let modality = record.get_or_empty(fields::MODALITY);
        if !self.modalities.contains(modality) {
            return Err(ValidationIssue::UnknownModality {
                value: modality.to_string(),
                allowed: self.modalities.clone(),
            });
        }

        if record.id().trim().is_empty() || record.name().trim().is_empty() {
            return Err(ValidationIssue::MissingIdentity);
        }

        Ok(())
    }
}
