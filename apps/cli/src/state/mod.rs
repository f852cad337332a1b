//! # Application State
//!
//! ```text
//! state/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── config.rs   ◄─── ConfigState: data path, currency, share precision
//! ```
//!
//! The bill itself lives in a `BillSession` from canteen-store; the CLI
//! only holds what it needs to find and display it.

pub mod config;

pub use config::{default_data_path, ConfigState, SNAPSHOT_FILE_NAME};
