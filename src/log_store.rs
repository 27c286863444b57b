use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File used when no other path is configured
pub const DEFAULT_LOG_FILE: &str = "galaxy-starter-logs.json";

/// Timestamp format for saved entries, e.g. `27/10/2025 19:45:12`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Error, Debug)]
pub enum LogStoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A saved battle result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub when: String,
    pub details: String,
}

impl LogEntry {
    /// Stamp `details` with the current local time
    pub fn now(details: impl Into<String>) -> Self {
        LogEntry {
            when: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            details: details.into(),
        }
    }
}

/// JSON file holding an array of saved battle results
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries
    /// A missing or unreadable file counts as an empty log
    pub fn load(&self) -> Vec<LogEntry> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring malformed log file {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    /// Overwrite the log with `entries`
    pub fn save(&self, entries: &[LogEntry]) -> Result<(), LogStoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        log::debug!("wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Add one entry and return the new entry count
    pub fn append(&self, entry: LogEntry) -> Result<usize, LogStoreError> {
        let mut entries = self.load();
        entries.push(entry);
        self.save(&entries)?;
        Ok(entries.len())
    }

    pub fn clear(&self) -> Result<(), LogStoreError> {
        self.save(&[])
    }
}
