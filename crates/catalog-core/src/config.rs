//! Catalog configuration.
//!
//! Built once at startup and handed to [`Catalog`](crate::Catalog); nothing
//! reads ambient globals after that.

use std::path::PathBuf;

use catalog_ingest::CSV_EXTENSION;
use catalog_model::ModalitySet;

use crate::stats::AggregationPolicy;

/// Base directory used when no `--base-dir` is given.
pub const DEFAULT_BASE_DIR: &str = "Argentina";

/// Resolve the base directory: an explicit path, else `./Argentina`.
pub fn resolve_base_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR))
}

/// Immutable settings for one catalog session.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Root of the data file tree.
    pub base_dir: PathBuf,

    /// Data file extension, without the dot.
    pub extension: String,

    /// Accepted modality strings.
    pub modalities: ModalitySet,

    /// How statistics treat malformed numbers.
    pub policy: AggregationPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            extension: CSV_EXTENSION.to_string(),
            modalities: ModalitySet::default(),
            policy: AggregationPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a new config builder
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }
}

/// Builder for CatalogConfig
#[derive(Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    /// Set the base directory
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the data file extension (leading dot optional)
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.config.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Set the accepted modalities
    pub fn modalities(mut self, modalities: ModalitySet) -> Self {
        self.config.modalities = modalities;
        self
    }

    /// Set the statistics aggregation policy
    pub fn policy(mut self, policy: AggregationPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn build(self) -> CatalogConfig {
        self.config
    }
}
