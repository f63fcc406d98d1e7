/*!
 * Core translation service implementation.
 *
 * This module contains the `TranslationService`, which wraps a single text
 * translation with bounded exponential-backoff retry and per-language error
 * logging. Provider failures never leave this module: once the attempts are
 * exhausted the original text is returned instead.
 */

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use log::{debug, error, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::ProviderError;
use crate::file_utils::FileManager;
use crate::providers::{Provider, TranslationRequest};

/// Retry settings applied to every translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOptions {
    /// Total attempts per text, the first call included
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_backoff_ms: u64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 1000,
        }
    }
}

/// Remaining budget of one retry chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    /// Attempts still allowed, the current one included
    pub attempts_remaining: u32,

    /// Delay to wait before the next attempt
    pub backoff_ms: u64,
}

impl RetryState {
    /// Start a retry chain
    pub fn new(options: RetryOptions) -> Self {
        Self {
            attempts_remaining: options.max_attempts,
            backoff_ms: options.initial_backoff_ms,
        }
    }

    /// State after a failed attempt, or `None` when the budget is spent
    pub fn next(self) -> Option<Self> {
        let attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if attempts_remaining == 0 {
            return None;
        }

        Some(Self {
            attempts_remaining,
            backoff_ms: self.backoff_ms.saturating_mul(2),
        })
    }
}

/// Format one error log record
pub fn format_error_record(timestamp: &str, text: &str, message: &str) -> String {
    format!("[{}] \"{}\" - Erro: {}", timestamp, text, message)
}

/// Replace embedded line breaks with single spaces
pub fn strip_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

/// Main translation service for resource entries
pub struct TranslationService {
    /// Provider doing the actual translation
    provider: Arc<dyn Provider>,

    /// Language of the source texts
    source_language: String,

    /// Directory receiving `erro-traducao-<lang>.log` files
    log_dir: PathBuf,

    /// Retry options
    pub options: RetryOptions,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(
        provider: Arc<dyn Provider>,
        source_language: impl Into<String>,
        log_dir: impl Into<PathBuf>,
        options: RetryOptions,
    ) -> Self {
        Self {
            provider,
            source_language: source_language.into(),
            log_dir: log_dir.into(),
            options,
        }
    }

    /// Create a translation service using the settings of `config`
    pub fn from_config(provider: Arc<dyn Provider>, config: &Config) -> Self {
        let options = RetryOptions {
            max_attempts: config.pipeline.retry_attempts,
            initial_backoff_ms: config.pipeline.retry_backoff_ms,
        };
        Self::new(provider, config.source_language.clone(), config.log_dir.clone(), options)
    }

    /// Error log file for a target language
    pub fn error_log_path(&self, target_language: &str) -> PathBuf {
        FileManager::generate_error_log_path(&self.log_dir, target_language)
    }

    /// Translate a text, retrying with exponential backoff.
    ///
    /// Every failed attempt is appended to the target language's error log.
    /// When all attempts fail the original text is returned. The only error
    /// returned is a failure to write the error log.
    pub async fn translate_text(&self, text: &str, target_language: &str) -> Result<String> {
        let mut state = RetryState::new(self.options);

        loop {
            let request = TranslationRequest::new(text, self.source_language.as_str(), target_language);

            let err = match self.provider.complete(request).await {
                Ok(response) => {
                    debug!("Translated \"{}\" to {}", text, target_language);
                    return Ok(strip_newlines(&response.text));
                }
                Err(err) => err,
            };

            self.log_failure(text, target_language, &err)?;

            match state.next() {
                None => {
                    error!("Giving up on \"{}\" ({}): {}. Keeping the original text", text, target_language, err);
                    return Ok(text.to_string());
                }
                Some(next) => {
                    warn!("Failed to translate \"{}\" ({}): {}. Retrying in {}ms...",
                        text, target_language, err, state.backoff_ms);
                    tokio::time::sleep(Duration::from_millis(state.backoff_ms)).await;
                    state = next;
                }
            }
        }
    }

    // Append one failure record to the target language's log
    fn log_failure(&self, text: &str, target_language: &str, err: &ProviderError) -> Result<()> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let record = format_error_record(&timestamp, text, &err.to_string());
        FileManager::append_to_log_file(self.error_log_path(target_language), &record)
    }
}
