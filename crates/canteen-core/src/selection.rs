//! # Selections
//!
//! The two quantity maps a billing session mutates during ordering.
//!
//! ```text
//! IndividualSelections                     SharedSelections
//! ────────────────────                     ────────────────
//! person id ─► item id ─► quantity         item id ─► quantity
//!
//! decrement to 0: key KEPT at 0            decrement to 0: key REMOVED
//! ```
//!
//! The asymmetry is deliberate. Totals only ever read the effective quantity,
//! which is 0 either way, so callers must not depend on which form they see.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Applies a signed delta to a quantity: `max(0, current + delta)`.
///
/// Computed in `i128` so no delta can overflow; the upper end saturates at
/// `u32::MAX`.
///
/// ```rust
/// use canteen_core::selection::clamp_quantity;
///
/// assert_eq!(clamp_quantity(2, -1), 1);
/// assert_eq!(clamp_quantity(0, -1), 0);
/// assert_eq!(clamp_quantity(3, -10), 0);
/// ```
pub fn clamp_quantity(current: u32, delta: i64) -> u32 {
    let next = i128::from(current) + i128::from(delta);
    next.clamp(0, i128::from(u32::MAX)) as u32
}

// =============================================================================
// Individual Selections
// =============================================================================

/// Per-person quantities: person id → (menu item id → quantity).
///
/// Absent entries mean quantity 0. Entries for people no longer on the
/// roster are tolerated and ignored by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndividualSelections(BTreeMap<String, BTreeMap<String, u32>>);

impl IndividualSelections {
    /// Creates an empty selection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with an empty entry for each given person id.
    pub fn empty_for<'a>(person_ids: impl IntoIterator<Item = &'a str>) -> Self {
        IndividualSelections(
            person_ids
                .into_iter()
                .map(|id| (id.to_string(), BTreeMap::new()))
                .collect(),
        )
    }

    /// Quantity of `item_id` attributed to `person_id` (0 if absent).
    pub fn quantity(&self, person_id: &str, item_id: &str) -> u32 {
        self.0
            .get(person_id)
            .and_then(|items| items.get(item_id))
            .copied()
            .unwrap_or(0)
    }

    /// All stored quantities for one person, if the person has an entry.
    pub fn for_person(&self, person_id: &str) -> Option<&BTreeMap<String, u32>> {
        self.0.get(person_id)
    }

    /// True if the person has at least one non-zero quantity.
    pub fn has_any(&self, person_id: &str) -> bool {
        self.0
            .get(person_id)
            .is_some_and(|items| items.values().any(|&qty| qty > 0))
    }

    /// Ensures an (empty) entry exists for `person_id`.
    pub fn ensure_person(&mut self, person_id: &str) {
        self.0.entry(person_id.to_string()).or_default();
    }

    /// Person ids that have an entry, including stale ones.
    pub fn person_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Adjusts a quantity in place and returns the new value.
    ///
    /// The key is written even when the result is 0.
    pub fn adjust(&mut self, person_id: &str, item_id: &str, delta: i64) -> u32 {
        let items = self.0.entry(person_id.to_string()).or_default();
        let slot = items.entry(item_id.to_string()).or_insert(0);
        *slot = clamp_quantity(*slot, delta);
        *slot
    }

    /// Pure form of [`adjust`](Self::adjust): returns the new selections and
    /// leaves `self` untouched.
    pub fn adjusted(&self, person_id: &str, item_id: &str, delta: i64) -> Self {
        let mut next = self.clone();
        next.adjust(person_id, item_id, delta);
        next
    }
}

// =============================================================================
// Shared Selections
// =============================================================================

/// Quantities shared equally by every participating person: item id →
/// quantity. A quantity of 0 is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SharedSelections(BTreeMap<String, u32>);

impl SharedSelections {
    /// Creates an empty shared map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared quantity of `item_id` (0 if absent).
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.0.get(item_id).copied().unwrap_or(0)
    }

    /// True if no item is currently shared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Item ids currently shared.
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Adjusts a shared quantity in place and returns the new value.
    ///
    /// When the result is 0 the key is removed.
    pub fn adjust(&mut self, item_id: &str, delta: i64) -> u32 {
        let next = clamp_quantity(self.quantity(item_id), delta);
        if next == 0 {
            self.0.remove(item_id);
        } else {
            self.0.insert(item_id.to_string(), next);
        }
        next
    }

    /// Pure form of [`adjust`](Self::adjust).
    pub fn adjusted(&self, item_id: &str, delta: i64) -> Self {
        let mut next = self.clone();
        next.adjust(item_id, delta);
        next
    }

    /// Drops any zero quantities (e.g. from a hand-edited snapshot file).
    pub fn without_zeros(mut self) -> Self {
        self.0.retain(|_, qty| *qty > 0);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        for current in [0_u32, 1, 2, 7, 100] {
            for delta in [-200_i64, -3, -1, 0, 1, 5, 200] {
                let expected = (i64::from(current) + delta).max(0) as u32;
                assert_eq!(clamp_quantity(current, delta), expected);
            }
        }
    }

    #[test]
    fn test_clamp_quantity_extremes() {
        assert_eq!(clamp_quantity(u32::MAX, 1), u32::MAX);
        assert_eq!(clamp_quantity(5, i64::MIN), 0);
        assert_eq!(clamp_quantity(0, i64::MAX), u32::MAX);
    }

    #[test]
    fn test_individual_adjust_never_negative() {
        let mut selections = IndividualSelections::new();
        assert_eq!(selections.adjust("akhil", "puri", -1), 0);
        assert_eq!(selections.adjust("akhil", "puri", 1), 1);
        assert_eq!(selections.adjust("akhil", "puri", 1), 2);
        assert_eq!(selections.adjust("akhil", "puri", -5), 0);
        assert_eq!(selections.quantity("akhil", "puri"), 0);
    }

    #[test]
    fn test_individual_zero_key_is_kept() {
        let mut selections = IndividualSelections::new();
        selections.adjust("akhil", "puri", 1);
        selections.adjust("akhil", "puri", -1);

        let items = selections.for_person("akhil").unwrap();
        assert_eq!(items.get("puri"), Some(&0));
        assert!(!selections.has_any("akhil"));
    }

    #[test]
    fn test_individual_adjusted_is_pure() {
        let before = IndividualSelections::empty_for(["akhil"]);
        let after = before.adjusted("akhil", "tea", 3);

        assert_eq!(before.quantity("akhil", "tea"), 0);
        assert_eq!(after.quantity("akhil", "tea"), 3);
    }

    #[test]
    fn test_shared_zero_key_is_removed() {
        let mut shared = SharedSelections::new();
        shared.adjust("tea", 1);
        shared.adjust("tea", 1);
        assert_eq!(shared.quantity("tea"), 2);

        shared.adjust("tea", -1);
        shared.adjust("tea", -1);
        assert_eq!(shared.quantity("tea"), 0);
        assert!(shared.is_empty());
        assert_eq!(shared, SharedSelections::new());
    }

    #[test]
    fn test_shared_over_decrement_on_absent_key() {
        let shared = SharedSelections::new().adjusted("coffee", -3);
        assert!(shared.is_empty());
    }

    #[test]
    fn test_shared_without_zeros() {
        let shared: SharedSelections =
            serde_json::from_str(r#"{"tea": 0, "coffee": 2}"#).unwrap();
        let cleaned = shared.without_zeros();
        assert_eq!(cleaned.item_ids().collect::<Vec<_>>(), vec!["coffee"]);
    }

    #[test]
    fn test_serializes_as_plain_maps() {
        let mut individual = IndividualSelections::empty_for(["1"]);
        individual.adjust("1", "9", 2);
        assert_eq!(
            serde_json::to_string(&individual).unwrap(),
            r#"{"1":{"9":2}}"#
        );

        let shared = SharedSelections::new().adjusted("9", 1);
        assert_eq!(serde_json::to_string(&shared).unwrap(), r#"{"9":1}"#);
    }
}
