//! Catalog operations over a tree of CSV data files.
//!
//! [`Catalog`] composes discovery, the record store, and the validator:
//!
//! | Operation     | Method                                      |
//! |---------------|---------------------------------------------|
//! | list all      | [`Catalog::list_all`]                       |
//! | select file   | [`Catalog::files`] + [`select_file`]        |
//! | add           | [`Catalog::add`]                            |
//! | find by key   | [`Catalog::find_by_key`]                    |
//! | edit          | [`Catalog::edit`]                           |
//! | delete        | [`Catalog::delete`]                         |
//! | statistics    | [`Catalog::statistics`]                     |
//! | export        | [`Catalog::consolidate`] + [`Catalog::write_export`] |
//!
//! Prompting is left to the caller; operations take already-collected
//! input.

mod catalog;
pub mod config;
mod error;
mod input;
pub mod stats;

pub use catalog::{Catalog, Located};
pub use config::{CatalogConfig, CatalogConfigBuilder, resolve_base_dir};
pub use error::{CatalogError, Result};
pub use input::{blank_record, format_listing_line, is_affirmative, normalize_modality, select_file};
pub use stats::{AggregationPolicy, FileStatistics, Statistics, Tally};
