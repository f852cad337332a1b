//! # Commands Module
//!
//! Every `canteen` subcommand, run against a [`BillSession`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Render + output)
//! ├── setup.rs     ◄─── seed, menu add/list, people add/list
//! ├── ordering.rs  ◄─── order, share, reset
//! └── bill.rs      ◄─── status, bill
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  canteen order Akhil Puri --delta 2                                    │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  ordering::order(&mut session, "Akhil", "Puri", 2)                     │
//! │         │                                                               │
//! │         │ -> CliResult<OrderResponse>   (saved before returning)        │
//! │         ▼                                                               │
//! │  emit(&response, &config, json)                                         │
//! │         │                                                               │
//! │         ├── --json ──► serde_json (camelCase)                          │
//! │         └── default ─► Render::render_text (uses ConfigState)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`BillSession`]: canteen_store::BillSession

pub mod bill;
pub mod ordering;
pub mod setup;

use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::state::ConfigState;

/// A command response that can be shown to a person.
pub trait Render: Serialize {
    /// Plain text form, formatted with the configured currency.
    fn render_text(&self, config: &ConfigState) -> String;
}

/// Renders a response as text or JSON.
pub fn emit<T: Render>(response: &T, config: &ConfigState, json: bool) -> CliResult<String> {
    if json {
        serde_json::to_string_pretty(response).map_err(|e| CliError::internal(e.to_string()))
    } else {
        Ok(response.render_text(config))
    }
}
