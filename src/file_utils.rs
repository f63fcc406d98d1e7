use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use std::fs::OpenOptions;
use std::io::Write;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }
    
    // @generates: Output path for a translated resource file
    // @params: output_dir, target_language, extension
    pub fn generate_output_path<P: AsRef<Path>>(
        output_dir: P,
        target_language: &str,
        extension: &str,
    ) -> PathBuf {
        let extension = extension.trim_start_matches('.');
        output_dir.as_ref().join(format!("{}.{}", target_language, extension))
    }

    // @generates: Error log path for a target language
    pub fn generate_error_log_path<P: AsRef<Path>>(log_dir: P, target_language: &str) -> PathBuf {
        log_dir.as_ref().join(format!("erro-traducao-{}.log", target_language))
    }
    
    /// Write a string to a file, replacing any previous content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }
        
        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        
        Ok(())
    }
    
    /// Append one line to a log file.
    ///
    /// The line is written with a single `write_all` on a file opened in append
    /// mode, so records from concurrent retry chains never interleave.
    pub fn append_to_log_file<P: AsRef<Path>>(path: P, line: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }
        
        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;
        
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        file.write_all(record.as_bytes())
            .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;
        
        Ok(())
    }
}
