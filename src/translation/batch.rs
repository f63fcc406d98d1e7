/*!
 * Batch translation processing.
 *
 * This module groups translation jobs into fixed-size batches. Every member
 * of a batch is translated concurrently on the current task; the batch is
 * complete only when all of them resolve. Results are written back by output
 * index, so completion order never affects the output order.
 */

use anyhow::Result;
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::resource_file::OutputBuffer;

use super::core::TranslationService;

/// A pending translation tied to its output slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    /// Index of the output line receiving the translation
    pub output_index: usize,

    /// Normalized source value
    pub text: String,

    /// Target language code
    pub target_language: String,
}

/// Batch translator for resource entries
pub struct BatchTranslator {
    /// The translation service to use
    service: Arc<TranslationService>,

    /// Maximum number of jobs in one batch
    batch_size: usize,

    /// Pause after a paced batch
    batch_delay: Duration,

    /// Jobs waiting for the next batch
    pending: Vec<TranslationJob>,
}

impl BatchTranslator {
    /// Create a new batch translator
    pub fn new(service: Arc<TranslationService>, batch_size: usize, batch_delay: Duration) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            service,
            batch_size,
            batch_delay,
            pending: Vec::with_capacity(batch_size),
        }
    }

    /// Queue a job; returns true once the batch is full
    pub fn push(&mut self, job: TranslationJob) -> bool {
        self.pending.push(job);
        self.pending.len() >= self.batch_size
    }

    /// Number of queued jobs
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Translate every job concurrently and wait for all of them.
    ///
    /// Returns `(output_index, translated_text)` pairs.
    pub async fn translate_batch(&self, jobs: &[TranslationJob]) -> Result<Vec<(usize, String)>> {
        let translations = jobs.iter().map(|job| async move {
            let text = self.service.translate_text(&job.text, &job.target_language).await?;
            Ok::<_, anyhow::Error>((job.output_index, text))
        });

        join_all(translations).await.into_iter().collect()
    }

    /// Resolve the queued batch into `buffer`.
    ///
    /// With `pace` set, waits the batch delay afterwards so the next batch
    /// starts no sooner than that. Returns the number of resolved entries.
    pub async fn flush(&mut self, buffer: &mut OutputBuffer, pace: bool) -> Result<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let jobs = std::mem::take(&mut self.pending);
        debug!("Processing batch of {} entries", jobs.len());

        let results = self.translate_batch(&jobs).await?;
        let mut resolved = 0;
        for (index, text) in results {
            if buffer.resolve(index, &text) {
                resolved += 1;
            } else {
                warn!("Output line {} was not pending, translation dropped", index + 1);
            }
        }

        if pace && !self.batch_delay.is_zero() {
            tokio::time::sleep(self.batch_delay).await;
        }

        Ok(resolved)
    }
}
