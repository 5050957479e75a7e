//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::ScoringError;

/// Read a JSON document, returning `None` if the file doesn't exist
pub fn read_json_value<P: AsRef<Path>>(path: P) -> Result<Option<Value>, ScoringError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| ScoringError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| ScoringError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ScoringError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| ScoringError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &json)
}

/// Write raw bytes to a file atomically
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ScoringError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ScoringError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| ScoringError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| ScoringError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ScoringError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ScoringError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScoringError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
