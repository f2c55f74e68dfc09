//! Column names with meaning to the catalog.
//!
//! Any other column in a data file is carried through untouched.

/// Unique program key.
pub const ID: &str = "id";

/// Program name.
pub const NAME: &str = "nombre_carrera";

/// Program duration in years.
pub const DURATION_YEARS: &str = "duracion_anios";

/// Annual intake quota.
pub const ANNUAL_QUOTA: &str = "cupos_anuales";

/// Delivery modality.
pub const MODALITY: &str = "modalidad";

/// Synthetic column added by the consolidated export.
pub const SOURCE_FILE: &str = "source_file";

/// Fields checked by the validator.
pub const REQUIRED: [&str; 5] = [ID, NAME, DURATION_YEARS, ANNUAL_QUOTA, MODALITY];
