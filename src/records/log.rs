use super::record::CallRecord;
use super::sink::RecordSink;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum RecordLogError {
    #[error("failed to serialize call records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Call records kept in memory and mirrored to a JSON array on disk
pub struct RecordLog {
    path: PathBuf,
    records: RwLock<Vec<CallRecord>>,
}

impl RecordLog {
    /// Load existing records from `path`, creating an empty log if it is missing
    ///
    /// Never fails: an unreadable file is logged and the service carries on
    /// with an empty in-memory set. A file that can't be parsed is renamed
    /// with a `.corrupt` suffix first.
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<CallRecord>>(&bytes) {
                Ok(records) => {
                    info!("Loaded {} call records from {}", records.len(), path.display());
                    records
                }
                Err(e) => {
                    error!("Failed to parse {}: {}", path.display(), e);
                    set_aside(&path).await;
                    create_empty(&path).await;
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                create_empty(&path).await;
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Path an unreadable log is moved to, e.g. `logs.json.corrupt`
pub fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

/// Move an unreadable log out of the way so later appends don't destroy it
async fn set_aside(path: &Path) {
    let backup = corrupt_path(path);
    match tokio::fs::rename(path, &backup).await {
        Ok(()) => warn!("Moved unreadable call log to {}", backup.display()),
        Err(e) => error!("Failed to move {} aside: {}", path.display(), e),
    }
}

async fn create_empty(path: &Path) {
    match tokio::fs::write(path, b"[]").await {
        Ok(()) => info!("Created empty call log at {}", path.display()),
        Err(e) => error!("Failed to create {}: {}", path.display(), e),
    }
}

#[async_trait::async_trait]
impl RecordSink for RecordLog {
    async fn append(&self, record: CallRecord) -> Result<(), RecordLogError> {
        // Hold the write lock across the file write so concurrent appends
        // land on disk in the same order as in memory.
        let mut records = self.records.write().await;
        records.push(record);

        let json = serde_json::to_vec_pretty(&*records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| RecordLogError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Saved call record #{} to {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }

    async fn list(&self) -> Vec<CallRecord> {
        self.records.read().await.clone()
    }
}
