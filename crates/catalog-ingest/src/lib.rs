//! Catalog data file access.
//!
//! - **Discovery**: recursively find data files under a base directory
//! - **Record store**: load a CSV file into a [`DataFile`](catalog_model::DataFile)
//!   and save it back without disturbing column order, quoting, or line
//!   endings
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::{list_csv_files, load_data_file, save_data_file};
//!
//! for path in list_csv_files(Path::new("Argentina")) {
//!     let file = load_data_file(&path)?;
//!     save_data_file(&path, &file)?;
//! }
//! ```

mod discovery;
mod error;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{CSV_EXTENSION, discover_files, list_csv_files};

// === Record Store ===
pub use store::{encode_data_file, load_data_file, parse_data_file, save_data_file};
