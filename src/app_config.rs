use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, ConfigError};

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language of the source resource file (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Source resource file, re-read for every target language
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Directory receiving `<lang>.<ext>` output files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of the output files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Directory receiving per-language translation error logs
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Translation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Batching, pacing, retry and checkpoint settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Service URL
    #[serde(default = "default_google_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_google_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Pipeline settings shared by every language pass
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Number of translations dispatched together
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause after each full batch, in milliseconds; never below
    /// `Config::MIN_BATCH_DELAY_MS`
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    /// Attempts per entry before falling back to the source text
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Delay before the first retry; doubles on every further retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Source lines between two checkpoints
    #[serde(default = "default_checkpoint_interval")]
    pub checkpoint_interval: usize,

    /// Source lines between two progress notices
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            retry_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            checkpoint_interval: default_checkpoint_interval(),
            progress_interval: default_progress_interval(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "pt".to_string()
}

fn default_input_file() -> PathBuf {
    PathBuf::from("./pt-br.yml")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_extension() -> String {
    "yml".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_google_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_batch_size() -> usize {
    5
}

fn default_batch_delay_ms() -> u64 {
    2000
}

fn default_retry_attempts() -> u32 {
    5
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_checkpoint_interval() -> usize {
    500
}

fn default_progress_interval() -> usize {
    100
}

impl Config {
    /// Default configuration file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "yalt.json";

    /// Smallest accepted pause between two batches
    pub const MIN_BATCH_DELAY_MS: u64 = 2000;

    /// Load the configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }

    /// Load the configuration file if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    // @validates: Config has usable values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_language.trim().is_empty() {
            return Err(ConfigError::EmptyValue("source_language"));
        }

        if self.output_extension.trim().is_empty() {
            return Err(ConfigError::EmptyValue("output_extension"));
        }

        if self.provider.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyValue("provider.endpoint"));
        }

        let pipeline = &self.pipeline;
        if pipeline.batch_size == 0 {
            return Err(ConfigError::ZeroValue("pipeline.batch_size"));
        }
        if pipeline.batch_delay_ms < Self::MIN_BATCH_DELAY_MS {
            return Err(ConfigError::BelowMinimum {
                field: "pipeline.batch_delay_ms",
                minimum: Self::MIN_BATCH_DELAY_MS,
            });
        }
        if pipeline.retry_attempts == 0 {
            return Err(ConfigError::ZeroValue("pipeline.retry_attempts"));
        }
        if pipeline.checkpoint_interval == 0 {
            return Err(ConfigError::ZeroValue("pipeline.checkpoint_interval"));
        }
        if pipeline.progress_interval == 0 {
            return Err(ConfigError::ZeroValue("pipeline.progress_interval"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            input_file: default_input_file(),
            output_dir: default_output_dir(),
            output_extension: default_output_extension(),
            log_dir: default_log_dir(),
            provider: ProviderConfig::default(),
            pipeline: PipelineConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
