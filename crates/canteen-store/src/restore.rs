//! # Snapshot Restore
//!
//! Turns a persisted JSON document back into a [`Snapshot`], one field at a
//! time.
//!
//! ## Fallback Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field                  Decode fails / invalid    Absent               │
//! │  ─────                  ──────────────────────    ──────               │
//! │  menuItems              [] + warn                 []                   │
//! │  people                 [] + warn                 []                   │
//! │  individualSelections   {} + warn                 {}                   │
//! │  sharedSelections       {} + warn                 {}                   │
//! │                                                                         │
//! │  A broken field never takes the healthy ones down with it, and never   │
//! │  blocks the user. The result is normalized (entry per person).         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use canteen_core::validation::{validate_menu, validate_roster, ValidationResult};
use canteen_core::{IndividualSelections, MenuItem, Person, SharedSelections, Snapshot};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Persisted key for the menu.
pub const MENU_ITEMS_KEY: &str = "menuItems";
/// Persisted key for the roster.
pub const PEOPLE_KEY: &str = "people";
/// Persisted key for per-person quantities.
pub const INDIVIDUAL_SELECTIONS_KEY: &str = "individualSelections";
/// Persisted key for shared quantities.
pub const SHARED_SELECTIONS_KEY: &str = "sharedSelections";

/// Result of restoring a document.
#[derive(Debug, Clone)]
pub struct Restored {
    pub snapshot: Snapshot,
    /// Keys that were present but had to be replaced by their default.
    pub defaulted: Vec<&'static str>,
}

/// Decodes one field, falling back to its default when it fails to decode
/// or fails `check`.
fn restore_field<T>(
    doc: &Map<String, Value>,
    key: &'static str,
    check: impl FnOnce(&T) -> ValidationResult<()>,
    defaulted: &mut Vec<&'static str>,
) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = doc.get(key) else {
        debug!(field = key, "Field absent, using default");
        return T::default();
    };

    let decoded = match serde_json::from_value::<T>(raw.clone()) {
        Ok(value) => value,
        Err(e) => {
            warn!(field = key, error = %e, "Could not decode saved field, using default");
            defaulted.push(key);
            return T::default();
        }
    };

    if let Err(e) = check(&decoded) {
        warn!(field = key, error = %e, "Saved field failed validation, using default");
        defaulted.push(key);
        return T::default();
    }

    decoded
}

/// Restores a snapshot from a parsed JSON object.
pub fn restore_snapshot(doc: &Map<String, Value>) -> Restored {
    let mut defaulted = Vec::new();

    let menu_items: Vec<MenuItem> = restore_field(
        doc,
        MENU_ITEMS_KEY,
        |items: &Vec<MenuItem>| validate_menu(items),
        &mut defaulted,
    );
    let people: Vec<Person> = restore_field(
        doc,
        PEOPLE_KEY,
        |people: &Vec<Person>| validate_roster(people),
        &mut defaulted,
    );
    let individual_selections: IndividualSelections =
        restore_field(doc, INDIVIDUAL_SELECTIONS_KEY, |_| Ok(()), &mut defaulted);
    let shared_selections: SharedSelections =
        restore_field(doc, SHARED_SELECTIONS_KEY, |_| Ok(()), &mut defaulted);

    let snapshot = Snapshot {
        menu_items,
        people,
        individual_selections,
        shared_selections,
    }
    .normalized();

    Restored {
        snapshot,
        defaulted,
    }
}

/// Parses raw bytes and restores them.
///
/// `None` if the bytes are not a JSON object at all; the caller then treats
/// the store as empty.
pub fn restore_from_slice(bytes: &[u8]) -> Option<Restored> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(doc)) => Some(restore_snapshot(&doc)),
        Ok(other) => {
            warn!(kind = json_kind(&other), "Saved snapshot is not a JSON object, ignoring");
            None
        }
        Err(e) => {
            warn!(error = %e, "Saved snapshot is not valid JSON, ignoring");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
