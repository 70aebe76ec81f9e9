use crate::error::{AppError, AppResult};
use crate::models::HistoryEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Durable, capped record of daily aggregate pressure scores
///
/// The history is one JSON array rewritten in full on every append,
/// truncated to the most recent `max_days` entries (FIFO eviction).
/// Saves go through a temp-file-then-rename so a crash mid-write leaves
/// the previous file intact, and appends are serialized through a mutex
/// so concurrent requests cannot interleave read-modify-write.
pub struct PressureHistoryStore {
    path: PathBuf,
    max_days: usize,
    write_lock: Mutex<()>,
}

impl PressureHistoryStore {
    /// Create a new history store backed by the given file
    pub fn new(path: PathBuf, max_days: usize) -> AppResult<Self> {
        if max_days == 0 {
            return Err(AppError::Config(
                "history max_days must be greater than 0".to_string(),
            ));
        }

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Persistence(format!("Failed to create history directory: {}", e))
                })?;
            }
        }

        info!("Pressure history store initialized: {:?}", path);

        Ok(Self {
            path,
            max_days,
            write_lock: Mutex::new(()),
        })
    }

    /// Read the persisted history
    ///
    /// A missing file is the valid initial state and yields an empty
    /// log; an unreadable or corrupt file is logged and also yields an
    /// empty log rather than failing the caller.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Could not read history file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding corrupt history file {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Append one entry and persist the truncated log
    ///
    /// Returns the log as persisted. The entry is recorded even when the
    /// file was previously missing or corrupt.
    pub async fn append(&self, entry: HistoryEntry) -> AppResult<Vec<HistoryEntry>> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load();
        entries.push(entry);

        // FIFO eviction: keep only the newest max_days entries
        if entries.len() > self.max_days {
            let excess = entries.len() - self.max_days;
            entries.drain(..excess);
        }

        self.save(&entries)?;
        Ok(entries)
    }

    /// Atomically rewrite the history file
    fn save(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(entries)?;

        // Write to a sibling temp file, then rename over the target
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");

        fs::write(&tmp, &json).map_err(|e| {
            AppError::Persistence(format!("Failed to write history temp file: {}", e))
        })?;

        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Persistence(format!("Failed to replace history file: {}", e))
        })?;

        Ok(())
    }
}
