//! # JSON File Store
//!
//! Persists the snapshot as a single JSON document on disk.
//!
//! ## File Format
//! ```json
//! {
//!   "savedAt": "2026-10-18T12:30:00Z",
//!   "menuItems": [{ "id": "1", "name": "Puri", "unitPrice": 800 }],
//!   "people": [{ "id": "1", "name": "Akhil" }],
//!   "individualSelections": { "1": { "1": 2 } },
//!   "sharedSelections": { "9": 1 }
//! }
//! ```
//! Prices are in paise. `savedAt` is informational and ignored on load.
//!
//! ## Write Path
//! ```text
//! save(snapshot)
//!      │
//!      ▼
//! create parent dir ──► write <file>.tmp ──► rename over <file>
//!                                            (readers never see half a file)
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use canteen_core::Snapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::restore::restore_from_slice;
use crate::store::SnapshotStore;

/// Wire form of a saved snapshot.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredSnapshot<'a> {
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
}

/// Snapshot store backed by one JSON file.
///
/// ## Example
/// ```rust,ignore
/// let store = JsonFileStore::new("/path/to/canteen.json").pretty(true);
/// let snapshot = store.load().await?.unwrap_or_default();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Creates a store for `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            pretty: true,
        }
    }

    /// Sets whether the file is pretty-printed. Default: true.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "snapshot".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(&self, snapshot: &Snapshot) -> StoreResult<Vec<u8>> {
        let stored = StoredSnapshot {
            saved_at: Utc::now(),
            snapshot,
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&stored)?
        } else {
            serde_json::to_vec(&stored)?
        };
        Ok(bytes)
    }
}

impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Option<Snapshot>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved snapshot yet");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let Some(restored) = restore_from_slice(&bytes) else {
            warn!(path = %self.path.display(), "Ignoring unreadable snapshot file");
            return Ok(None);
        };

        if !restored.defaulted.is_empty() {
            warn!(
                path = %self.path.display(),
                fields = ?restored.defaulted,
                "Some saved fields were reset to defaults"
            );
        }
        info!(
            path = %self.path.display(),
            menu_items = restored.snapshot.menu_items.len(),
            people = restored.snapshot.people.len(),
            "Snapshot loaded"
        );
        Ok(Some(restored.snapshot))
    }

    async fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let bytes = self.encode(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Snapshot saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
