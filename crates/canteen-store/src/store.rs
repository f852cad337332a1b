//! # Snapshot Store
//!
//! The narrow load/save boundary between the pure engine and wherever the
//! snapshot lives.
//!
//! ```text
//! ┌──────────────────┐   load() -> Option<Snapshot>   ┌──────────────────┐
//! │   BillSession    │ ◄───────────────────────────── │  SnapshotStore   │
//! │  (session.rs)    │ ─────────────────────────────► │  JsonFileStore   │
//! └──────────────────┘   save(&Snapshot)              │  MemoryStore     │
//!                                                     └──────────────────┘
//! ```

use std::future::Future;

use canteen_core::Snapshot;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreResult;

/// Persistence collaborator for a billing snapshot.
///
/// `load` returns `Ok(None)` when nothing has been saved yet (or what was
/// saved is unreadable as a snapshot); errors are reserved for I/O failures.
pub trait SnapshotStore {
    /// Loads the last saved snapshot, if any.
    fn load(&self) -> impl Future<Output = StoreResult<Option<Snapshot>>> + Send;

    /// Replaces the saved snapshot.
    fn save(&self, snapshot: &Snapshot) -> impl Future<Output = StoreResult<()>> + Send;
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Keeps the snapshot in process memory, for tests and for embedding the
/// engine where nothing should touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Snapshot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        MemoryStore {
            slot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    async fn load(&self) -> StoreResult<Option<Snapshot>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        debug!(
            menu_items = snapshot.menu_items.len(),
            people = snapshot.people.len(),
            "Saving snapshot to memory"
        );
        *self.slot.lock().await = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let snapshot = Snapshot::canteen_defaults();
        store.save(&snapshot).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn test_memory_store_save_replaces() {
        let store = MemoryStore::with_snapshot(Snapshot::canteen_defaults());
        store.save(&Snapshot::default()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(Snapshot::default()));
    }
}
