//! Diagnostics for the console, built on `tracing-subscriber`.
//!
//! The menu owns stdout, so diagnostics go to stderr or to a log file. At
//! the default `warn` level an ordinary session prints nothing; `-v` shows
//! writes and `-vv` shows discovery and loads.
//!
//! | level   | emitted for                                      |
//! |---------|--------------------------------------------------|
//! | `warn`  | duplicate ids, unreadable entries, overlong rows |
//! | `info`  | saved data files, exports, session start         |
//! | `debug` | discovery, loads, menu choices, rejected records |

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level. Dependencies stay at
/// `warn`.
const CATALOG_TARGETS: [&str; 5] = [
    "catalog_cli",
    "catalog_core",
    "catalog_ingest",
    "catalog_model",
    "catalog_validate",
];

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings, resolved from command-line flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// `RUST_LOG`, when set, replaces `level_filter`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: false,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Filter directives for this configuration.
    pub fn directives(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        CATALOG_TARGETS
            .iter()
            .fold(String::from("warn"), |mut directives, target| {
                directives.push_str(&format!(",{target}={level}"));
                directives
            })
    }

    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return filter;
            }
        }
        EnvFilter::new(self.directives())
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        let Some(path) = &self.log_file else {
            return Ok(BoxMakeWriter::new(io::stderr));
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        Ok(BoxMakeWriter::new(Mutex::new(file)))
    }
}

/// Install the global subscriber. Call once, before the catalog is opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let writer = config.writer()?;
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(event_layer(config, writer))
        .try_init()
        .context("a global subscriber is already installed")
}

fn event_layer<S>(config: &LogConfig, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    // Files never get escape codes.
    let ansi = config.with_ansi && config.log_file.is_none();
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target)
        .with_ansi(ansi);

    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.json().boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
    }
}
