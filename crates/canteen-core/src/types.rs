//! # Domain Types
//!
//! Menu items, people and the snapshot the engine computes over.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Snapshot                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    MenuItem     │   │     Person      │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id             │   │  id             │                              │
//! │  │  name           │   │  name           │                              │
//! │  │  unit_price     │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌─────────────────────┐                 │
//! │  │  IndividualSelections    │   │  SharedSelections   │                 │
//! │  │  person ─► item ─► qty   │   │  item ─► qty        │                 │
//! │  └──────────────────────────┘   └─────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Menu and roster are append-only: setup adds entries, nothing removes them.
//! Vec order is insertion order, which is the display order of the bill.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::{IndividualSelections, SharedSelections};
use crate::validation::{validate_item_name, validate_person_name, validate_unit_price};

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable food or drink with a fixed unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price of one unit, in paise.
    pub unit_price: Money,
}

impl MenuItem {
    /// Cost of `quantity` units of this item.
    #[inline]
    pub fn line_total(&self, quantity: impl Into<u64>) -> Money {
        self.unit_price.multiply_quantity(quantity.into())
    }
}

// =============================================================================
// Person
// =============================================================================

/// Someone at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Person {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything a billing session knows: the caller-owned record the engine
/// reads and the store persists.
///
/// Every field defaults when absent from a persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Snapshot {
    pub menu_items: Vec<MenuItem>,
    pub people: Vec<Person>,
    pub individual_selections: IndividualSelections,
    pub shared_selections: SharedSelections,
}

impl Snapshot {
    /// Creates a snapshot from a menu and roster with no selections yet.
    pub fn new(menu_items: Vec<MenuItem>, people: Vec<Person>) -> Self {
        let individual_selections =
            IndividualSelections::empty_for(people.iter().map(|p| p.id.as_str()));
        Snapshot {
            menu_items,
            people,
            individual_selections,
            shared_selections: SharedSelections::new(),
        }
    }

    /// The canteen's usual menu and group, used to seed a fresh session.
    pub fn canteen_defaults() -> Self {
        const MENU: &[(&str, &str, i64)] = &[
            ("1", "Puri", 8),
            ("2", "Appam", 8),
            ("3", "Dosa", 8),
            ("4", "Puttu", 8),
            ("5", "Snacks", 7),
            ("6", "Kadala Curry", 15),
            ("7", "Gravy", 15),
            ("8", "Egg", 10),
            ("9", "Tea", 9),
            ("10", "Coffee", 10),
        ];
        const PEOPLE: &[(&str, &str)] = &[
            ("1", "Akhil"),
            ("2", "Vishnu"),
            ("3", "Riyas"),
            ("4", "Dinto"),
            ("5", "Swapna"),
        ];

        let menu_items = MENU
            .iter()
            .map(|(id, name, rupees)| MenuItem {
                id: id.to_string(),
                name: name.to_string(),
                unit_price: Money::from_major(*rupees),
            })
            .collect();
        let people = PEOPLE
            .iter()
            .map(|(id, name)| Person {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();

        Snapshot::new(menu_items, people)
    }

    /// Appends a menu item with a fresh id.
    ///
    /// ## Rules
    /// - Name is trimmed and must be non-empty
    /// - Unit price must be positive
    pub fn add_menu_item(&mut self, name: &str, unit_price: Money) -> CoreResult<MenuItem> {
        let name = name.trim();
        validate_item_name(name)?;
        validate_unit_price(unit_price)?;

        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            unit_price,
        };
        self.menu_items.push(item.clone());
        Ok(item)
    }

    /// Appends a person with a fresh id and an empty selection entry.
    pub fn add_person(&mut self, name: &str) -> CoreResult<Person> {
        let name = name.trim();
        validate_person_name(name)?;

        let person = Person {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.individual_selections.ensure_person(&person.id);
        self.people.push(person.clone());
        Ok(person)
    }

    /// Looks up a menu item by id, then by case-insensitive name.
    pub fn find_item(&self, key: &str) -> Option<&MenuItem> {
        let key = key.trim();
        self.menu_items
            .iter()
            .find(|item| item.id == key)
            .or_else(|| {
                self.menu_items
                    .iter()
                    .find(|item| item.name.eq_ignore_ascii_case(key))
            })
    }

    /// Looks up a person by id, then by case-insensitive name.
    pub fn find_person(&self, key: &str) -> Option<&Person> {
        let key = key.trim();
        self.people.iter().find(|p| p.id == key).or_else(|| {
            self.people
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(key))
        })
    }

    /// Like [`find_item`](Self::find_item) but fails with `ItemNotFound`.
    pub fn require_item(&self, key: &str) -> CoreResult<&MenuItem> {
        self.find_item(key)
            .ok_or_else(|| CoreError::ItemNotFound(key.to_string()))
    }

    /// Like [`find_person`](Self::find_person) but fails with `PersonNotFound`.
    pub fn require_person(&self, key: &str) -> CoreResult<&Person> {
        self.find_person(key)
            .ok_or_else(|| CoreError::PersonNotFound(key.to_string()))
    }

    /// Clears every selection back to an empty entry per roster person.
    ///
    /// Menu and roster are untouched.
    pub fn reset_selections(&mut self) {
        self.individual_selections =
            IndividualSelections::empty_for(self.people.iter().map(|p| p.id.as_str()));
        self.shared_selections = SharedSelections::new();
    }

    /// Returns the snapshot with an entry for every roster person and no
    /// zero-quantity shared keys. Stale entries for unknown people are kept.
    pub fn normalized(mut self) -> Self {
        for person in &self.people {
            self.individual_selections.ensure_person(&person.id);
        }
        self.shared_selections = self.shared_selections.without_zeros();
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_canteen_defaults() {
        let snapshot = Snapshot::canteen_defaults();
        assert_eq!(snapshot.menu_items.len(), 10);
        assert_eq!(snapshot.people.len(), 5);
        assert_eq!(snapshot.find_item("Tea").unwrap().unit_price, Money::from_major(9));
        assert_eq!(
            snapshot.individual_selections.person_ids().count(),
            snapshot.people.len()
        );
        assert!(snapshot.shared_selections.is_empty());
    }

    #[test]
    fn test_add_menu_item_trims_and_appends() {
        let mut snapshot = Snapshot::default();
        let item = snapshot
            .add_menu_item("  Masala Dosa ", Money::from_major_minor(22, 50))
            .unwrap();

        assert_eq!(item.name, "Masala Dosa");
        assert_eq!(snapshot.menu_items, vec![item.clone()]);
        assert!(Uuid::parse_str(&item.id).is_ok());
    }

    #[test]
    fn test_add_menu_item_rejects_bad_input() {
        let mut snapshot = Snapshot::default();

        let err = snapshot.add_menu_item("   ", Money::from_major(5)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let err = snapshot.add_menu_item("Tea", Money::zero()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        assert!(snapshot.menu_items.is_empty());
    }

    #[test]
    fn test_add_person_creates_selection_entry() {
        let mut snapshot = Snapshot::default();
        let person = snapshot.add_person("Swapna").unwrap();

        assert!(snapshot
            .individual_selections
            .for_person(&person.id)
            .is_some_and(|items| items.is_empty()));
        assert!(snapshot.add_person("").is_err());
        assert_eq!(snapshot.people.len(), 1);
    }

    #[test]
    fn test_find_by_id_then_name() {
        let snapshot = Snapshot::canteen_defaults();

        assert_eq!(snapshot.find_item("9").unwrap().name, "Tea");
        assert_eq!(snapshot.find_item("kadala curry").unwrap().id, "6");
        assert_eq!(snapshot.find_person("RIYAS").unwrap().id, "3");
        assert!(snapshot.find_person("Nobody").is_none());
        assert!(matches!(
            snapshot.require_item("Biriyani"),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_reset_keeps_menu_and_roster() {
        let mut snapshot = Snapshot::canteen_defaults();
        snapshot.individual_selections.adjust("1", "1", 2);
        snapshot.shared_selections.adjust("9", 1);

        let menu = snapshot.menu_items.clone();
        let people = snapshot.people.clone();
        snapshot.reset_selections();

        assert_eq!(snapshot.menu_items, menu);
        assert_eq!(snapshot.people, people);
        assert_eq!(snapshot.individual_selections.quantity("1", "1"), 0);
        assert!(snapshot.individual_selections.for_person("1").unwrap().is_empty());
        assert!(snapshot.shared_selections.is_empty());
    }

    #[test]
    fn test_snapshot_fields_default_when_absent() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"people": [{"id": "1", "name": "Akhil"}]}"#).unwrap();
        assert!(snapshot.menu_items.is_empty());
        assert_eq!(snapshot.people.len(), 1);

        let normalized = snapshot.normalized();
        assert!(normalized.individual_selections.for_person("1").is_some());
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let json = serde_json::to_value(Snapshot::canteen_defaults()).unwrap();
        for key in [
            "menuItems",
            "people",
            "individualSelections",
            "sharedSelections",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["menuItems"][0]["unitPrice"], 800);
    }
}
