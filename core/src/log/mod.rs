//! Logging bootstrap for hosts embedding the listing engine.
//!
//! Wires `tracing` to a rolling file sink plus stderr. `init` is intended
//! to be called once at startup and is safe to call again: later calls get
//! the handle installed by the first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, util::SubscriberInitExt};

const ENV_FILTER_VARS: [&str; 2] = ["LISTER_LOG", "RUST_LOG"];

static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

/// Re-export so callers do not need `tracing-subscriber` directly.
pub use tracing_subscriber::filter::LevelFilter as LogLevel;

/// Rolling strategy for the file sink.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogRolling {
    Hourly,
    Daily,
    Never,
}

impl LogRolling {
    fn to_rotation(self) -> tracing_appender::rolling::Rotation {
        match self {
            LogRolling::Hourly => tracing_appender::rolling::Rotation::HOURLY,
            LogRolling::Daily => tracing_appender::rolling::Rotation::DAILY,
            LogRolling::Never => tracing_appender::rolling::Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rolling log files.
    pub directory: PathBuf,
    /// File name prefix (suffix is `.log`).
    pub file_prefix: String,
    /// Minimum level for the file sink.
    pub file_level: LevelFilter,
    /// Minimum level for stderr.
    pub console_level: LevelFilter,
    /// Forward `log` crate records into `tracing`.
    pub capture_log: bool,
    /// Optional filter directive, e.g. `lister_core=debug`.
    pub env_filter: Option<String>,
    pub rolling: LogRolling,
}

impl Default for LogConfig {
    fn default() -> Self {
        let console_level =
            if cfg!(debug_assertions) { LevelFilter::INFO } else { LevelFilter::WARN };
        let env_filter = ENV_FILTER_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|directive| !directive.trim().is_empty());

        Self {
            directory: default_log_directory(),
            file_prefix: "lister".to_string(),
            file_level: LevelFilter::DEBUG,
            console_level,
            capture_log: true,
            env_filter,
            rolling: LogRolling::Daily,
        }
    }
}

impl LogConfig {
    pub fn with_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directory = path.into();
        self
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }
}

/// Owns the background writer for the file sink.
#[derive(Debug)]
pub struct LogHandle {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    directory: PathBuf,
}

impl LogHandle {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Install the global subscriber. First call wins; subsequent calls return
/// the existing handle and ignore their configuration.
pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    if let Some(handle) = LOG_HANDLE.get() {
        return Ok(handle);
    }

    let handle = setup(config)?;
    let _ = LOG_HANDLE.set(handle);
    Ok(LOG_HANDLE.get().expect("log handle initialised"))
}

fn setup(config: LogConfig) -> Result<LogHandle> {
    if config.capture_log {
        let _ = tracing_log::LogTracer::builder().with_max_level(log::LevelFilter::Debug).init();
    }

    fs::create_dir_all(&config.directory)
        .with_context(|| format!("creating log directory at {}", config.directory.display()))?;

    let rolling = tracing_appender::rolling::Builder::new()
        .rotation(config.rolling.to_rotation())
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(config.directory.clone())
        .context("creating rolling log appender")?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling);

    let directive = config
        .env_filter
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| if cfg!(debug_assertions) { "debug" } else { "info" }.to_string());
    let env_filter = EnvFilter::try_new(directive).context("parsing env filter directive")?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_file(true)
        .with_line_number(true)
        .with_filter(config.file_level);
    let console_layer =
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(config.console_level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(LogHandle { _guard: guard, directory: config.directory })
}

fn default_log_directory() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("dev", "ListerCore", "lister-core") {
        dirs.data_dir().join("logs")
    } else {
        std::env::temp_dir().join("lister-core-logs")
    }
}
