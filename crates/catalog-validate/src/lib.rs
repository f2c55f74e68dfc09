//! Validation of catalog program records.
//!
//! ```
//! use catalog_model::Record;
//! use catalog_validate::{ValidationIssue, Validator};
//!
//! let record: Record = [
//!     ("id", "MED-01"),
//!     ("nombre_carrera", "Medicina"),
//!     ("duracion_anios", "6"),
//!     ("cupos_anuales", "0"),
//!     ("modalidad", "Presencial"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let issue = Validator::default().validate(&record).unwrap_err();
//! assert!(matches!(issue, ValidationIssue::NotPositive { .. }));
//! ```

mod issue;
mod validator;

pub use issue::ValidationIssue;
pub use validator::{Validator, parse_integer};
