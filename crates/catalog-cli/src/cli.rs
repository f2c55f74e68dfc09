//! CLI argument definitions for the catalog console.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use catalog_cli::logging::{LogConfig, LogFormat};
use catalog_core::AggregationPolicy;

#[derive(Parser)]
#[command(
    name = "catalog-cli",
    version,
    about = "Manage a tree of university program CSV catalogs",
    long_about = "Interactive console for listing, adding, editing, deleting, \
                  summarising and exporting program records stored as CSV files \
                  in a country/province/institution directory tree."
)]
pub struct Cli {
    /// Root of the catalog tree (default: ./Argentina).
    #[arg(long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Extension of data files to discover.
    #[arg(long = "extension", value_name = "EXT", default_value = "csv")]
    pub extension: String,

    /// How statistics treat non-integer durations and quotas.
    #[arg(long = "stats-policy", value_enum, default_value = "legacy")]
    pub stats_policy: StatsPolicyArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings: `--log-level` beats `-v`/`-q`, and either one
    /// disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => io::stderr().is_terminal(),
            },
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatsPolicyArg {
    /// Count every record; sum quota when it parses, duration when both parse.
    Legacy,
    /// Count every record; skip sums for records with a malformed number.
    CountAll,
    /// Leave records with a malformed number out entirely.
    SkipInvalid,
}

impl From<StatsPolicyArg> for AggregationPolicy {
    fn from(arg: StatsPolicyArg) -> Self {
        match arg {
            StatsPolicyArg::Legacy => AggregationPolicy::LegacyParity,
            StatsPolicyArg::CountAll => AggregationPolicy::CountAllSkipInvalidSums,
            StatsPolicyArg::SkipInvalid => AggregationPolicy::SkipInvalidRecords,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "catalog-cli",
            "--base-dir",
            "/data/Argentina",
            "--stats-policy",
            "skip-invalid",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.base_dir, Some(PathBuf::from("/data/Argentina")));
        assert_eq!(cli.extension, "csv");
        assert_eq!(
            AggregationPolicy::from(cli.stats_policy),
            AggregationPolicy::SkipInvalidRecords
        );
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn defaults_to_legacy_policy() {
        let cli = Cli::try_parse_from(["catalog-cli"]).unwrap();
        assert!(cli.base_dir.is_none());
        assert_eq!(
            AggregationPolicy::from(cli.stats_policy),
            AggregationPolicy::LegacyParity
        );
    }

    #[test]
    fn log_level_flag_overrides_verbosity() {
        let cli = Cli::try_parse_from(["catalog-cli", "-q", "--log-level", "debug"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn plain_run_defers_to_rust_log() {
        let cli = Cli::try_parse_from(["catalog-cli", "--log-format", "json"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
    }
}
