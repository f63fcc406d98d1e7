/*!
 * Translation pipeline for localization resources.
 *
 * This module is split into several submodules:
 *
 * - `core`: single-text translation with retry, backoff and error logging
 * - `batch`: concurrent batches of translation jobs with pacing
 * - `checkpoint`: partial and final writes of the output file
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, TranslationJob};
pub use self::checkpoint::CheckpointWriter;
pub use self::core::{RetryOptions, RetryState, TranslationService};

// Submodules
pub mod batch;
pub mod checkpoint;
pub mod core;
