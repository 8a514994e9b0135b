use eligibility_core::{CheckRecord, RecentChecks};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryStoreError>;

const HISTORY_FILE: &str = "recent_checks.json";

/// Recent checks persisted as a JSON array, the same shape the browser keeps
/// in local storage.
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
}

impl HistoryStore {
    pub fn new(path: Option<PathBuf>, limit: usize) -> Self {
        let path = path.unwrap_or_else(default_history_path);
        Self { path, limit }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing, unreadable or corrupt history yields an empty list.
    pub fn load(&self) -> RecentChecks {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!("Failed to read history {:?}: {}", self.path, e);
            RecentChecks::new(self.limit)
        })
    }

    /// Like `load`, but a file that exists and cannot be read is an error.
    /// Corrupt JSON still starts a fresh list.
    pub fn try_load(&self) -> Result<RecentChecks> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecentChecks::new(self.limit));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<CheckRecord>>(&raw) {
            Ok(entries) => Ok(RecentChecks::from_entries(entries, self.limit)),
            Err(e) => {
                tracing::warn!("Ignoring corrupt history {:?}: {}", self.path, e);
                Ok(RecentChecks::new(self.limit))
            }
        }
    }

    pub fn save(&self, recent: &RecentChecks) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(recent.entries())?;
        std::fs::write(&self.path, json)?;

        tracing::debug!("Saved {} recent checks to {:?}", recent.len(), self.path);
        Ok(())
    }

    pub fn record(&self, record: CheckRecord) -> Result<RecentChecks> {
        let mut recent = self.try_load()?;
        recent.record(record);
        self.save(&recent)?;
        Ok(recent)
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&RecentChecks::new(self.limit))?;
        tracing::info!("History cleared");
        Ok(())
    }
}

fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eligibility")
        .join(HISTORY_FILE)
}
