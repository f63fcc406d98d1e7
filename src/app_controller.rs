use anyhow::{Result, Context};
use log::{info, warn, debug};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app_config::Config;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::google::GoogleTranslate;
use crate::resource_file::{classify_line, OutputBuffer, SourceLine};
use crate::translation::{BatchTranslator, CheckpointWriter, TranslationJob, TranslationService};

// @module: Application controller driving one pass per target language

/// Outcome of one language pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    /// Target language code
    pub language: String,
    /// Source lines processed
    pub lines: usize,
    /// Entries sent for translation
    pub translated: usize,
    /// Final output file
    pub output_path: PathBuf,
}

/// Main application controller for resource translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Shared translation service
    service: Arc<TranslationService>,

    // @field: Output file writer
    checkpoint: CheckpointWriter,
}

impl Controller {
    // @method: Create a new controller using the configured HTTP provider
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = GoogleTranslate::from_config(&config.provider);
        Self::with_provider(config, Arc::new(provider))
    }

    // @method: Create a new controller with an explicit provider
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        debug!("Using translation provider: {}", provider.name());
        let service = Arc::new(TranslationService::from_config(provider, &config));
        let checkpoint = CheckpointWriter::new(config.output_dir.clone(), config.output_extension.clone());

        Ok(Self {
            config,
            service,
            checkpoint,
        })
    }

    /// Translate the input file into every language, one language at a time
    pub async fn run(&self, languages: &[String]) -> Result<Vec<PassSummary>> {
        let mut summaries = Vec::with_capacity(languages.len());

        for language in languages {
            match language_utils::validate_language_code(language) {
                Ok(code_type) => debug!("Target language {} is a {:?} code", language, code_type),
                Err(_) => warn!("'{}' is not a known ISO 639 code, sending it to the provider as is", language),
            }

            info!("Translating {:?} from {} to {}",
                self.config.input_file, self.config.source_language, language_utils::display_label(language));
            summaries.push(self.translate_language(language).await?);
        }

        Ok(summaries)
    }

    /// Run one full pass over the input file for a target language.
    ///
    /// Lines are read one at a time. Passthrough and empty entries are
    /// written straight to the output buffer; other entries get a pending
    /// slot and join the current batch. A full batch is translated and
    /// followed by the pacing delay. Checkpoints are written every
    /// `checkpoint_interval` source lines. At end of stream the partial
    /// batch is drained without pacing and the output file is written
    /// one last time.
    pub async fn translate_language(&self, language: &str) -> Result<PassSummary> {
        let pipeline = &self.config.pipeline;
        let input_file = &self.config.input_file;

        let file = File::open(input_file)
            .await
            .with_context(|| format!("Failed to open input file: {:?}", input_file))?;
        let mut lines = BufReader::new(file).lines();

        let mut buffer = OutputBuffer::new();
        let mut batch = BatchTranslator::new(
            self.service.clone(),
            pipeline.batch_size,
            Duration::from_millis(pipeline.batch_delay_ms),
        );
        let mut processed = 0usize;
        let mut translated = 0usize;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("Failed to read input file: {:?}", input_file))?
        {
            match classify_line(&line) {
                SourceLine::Entry { key, value } => {
                    let output_index = buffer.push_pending(key);
                    let full = batch.push(TranslationJob {
                        output_index,
                        text: value,
                        target_language: language.to_string(),
                    });
                    if full {
                        translated += batch.flush(&mut buffer, true).await?;
                    }
                }
                other => {
                    if let Some(output) = other.resolved_output() {
                        buffer.push_resolved(output);
                    }
                }
            }

            processed += 1;

            if processed % pipeline.progress_interval == 0 {
                info!("{}: {} lines processed", language, processed);
            }

            if processed % pipeline.checkpoint_interval == 0 {
                self.checkpoint.flush(&buffer, language)?;
                info!("{}: checkpoint saved at {} lines", language, processed);
            }
        }

        translated += batch.flush(&mut buffer, false).await?;

        let output_path = self.checkpoint.flush(&buffer, language)?;
        info!("{}: translation finished, {} lines written to {:?}", language, processed, output_path);

        Ok(PassSummary {
            language: language.to_string(),
            lines: processed,
            translated,
            output_path,
        })
    }
}
