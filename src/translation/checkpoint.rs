/*!
 * Checkpoint writer.
 *
 * Persists the in-progress output buffer of a language pass. A checkpoint
 * overwrites the whole output file, so an interrupted pass leaves every line
 * translated so far on disk, with not-yet-translated entries as empty lines.
 */

use anyhow::Result;
use std::path::PathBuf;

use crate::file_utils::FileManager;
use crate::resource_file::OutputBuffer;

/// Writes output buffers to `<output_dir>/<lang>.<ext>`
#[derive(Debug, Clone)]
pub struct CheckpointWriter {
    output_dir: PathBuf,
    extension: String,
}

impl CheckpointWriter {
    /// Create a new writer
    pub fn new(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    /// Output file for a target language
    pub fn output_path(&self, target_language: &str) -> PathBuf {
        FileManager::generate_output_path(&self.output_dir, target_language, &self.extension)
    }

    /// Write the whole buffer, replacing the previous content
    pub fn flush(&self, buffer: &OutputBuffer, target_language: &str) -> Result<PathBuf> {
        let path = self.output_path(target_language);
        FileManager::write_to_file(&path, &buffer.render())?;
        Ok(path)
    }
}
