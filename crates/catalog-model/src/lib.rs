//! Data model for academic program catalogs.
//!
//! A catalog is a tree of CSV data files. Each file carries one header row
//! and zero or more program records keyed by column name.
//!
//! # Types
//!
//! - [`Record`]: one program row, column name to raw string value
//! - [`DataFile`]: the columns and records of one CSV file, plus the layout
//!   details needed to write it back unchanged
//! - [`Modality`] / [`ModalitySet`]: accepted delivery modes
//! - [`fields`]: well-known column names

pub mod fields;
mod modality;
mod record;
mod table;
mod text;

pub use modality::{Modality, ModalitySet, ParseModalityError};
pub use record::{Record, SourcedRecord};
pub use table::{DataFile, FileLayout, LineTerminator};
pub use text::title_case;
