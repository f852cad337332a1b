//! # canteen-store: Snapshot Persistence for Canteen Split
//!
//! This crate is the side-effecting boundary around the pure engine in
//! `canteen-core`. It loads and saves the billing snapshot and keeps an
//! autosaving session on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Canteen Split Data Flow                            │
//! │                                                                         │
//! │  CLI command (order Akhil Puri)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  canteen-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  BillSession  │───►│ SnapshotStore │───►│   restore    │  │   │
//! │  │   │ (session.rs)  │    │ JsonFileStore │    │ field-by-    │  │   │
//! │  │   │ mutate + save │    │ MemoryStore   │    │ field decode │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               canteen.json (platform data dir)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use canteen_core::Snapshot;
//! use canteen_store::{BillSession, JsonFileStore};
//!
//! let store = JsonFileStore::new("path/to/canteen.json");
//! let mut session = BillSession::open(store, Snapshot::canteen_defaults).await?;
//!
//! session.adjust_individual("Akhil", "Puri", 1).await?;
//! let bill = session.engine().final_bill();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod restore;
pub mod session;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use restore::{restore_snapshot, Restored};
pub use session::BillSession;
pub use store::{MemoryStore, SnapshotStore};
