//! # Allocation Engine
//!
//! Computes who owes what from a [`Snapshot`]: individual costs, the shared
//! cost, the equal shared share, per-person final totals and the grand total.
//!
//! ## Allocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Allocation Flow                                  │
//! │                                                                         │
//! │  IndividualSelections ──► individual_total(person)  (Money)            │
//! │           │                                                             │
//! │           └──► participating_people()  (any qty > 0, roster order)     │
//! │                         │                                               │
//! │  SharedSelections ──► shared_total() ──┐                               │
//! │                         │              ▼                               │
//! │                         └──► shared_cost_per_participant()  (f64)      │
//! │                                        │  0 when nobody participates    │
//! │                                        ▼                               │
//! │                         person_final_total(person)  (participants only)│
//! │                                                                         │
//! │  grand_total()          = Σ participants' individual + shared total    │
//! │  grand_total_by_item()  = Σ items total_quantity × price               │
//! │  Both are whole paise and must agree.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a borrowed, read-only view: it holds no state of its own and
//! never fails. Unknown person or item ids simply contribute zero.

use crate::money::Money;
use crate::selection::{IndividualSelections, SharedSelections};
use crate::types::{Person, Snapshot};

// =============================================================================
// Pure Selection Transforms
// =============================================================================

/// Returns new individual selections with `delta` applied to one quantity.
///
/// The result is `max(0, current + delta)`; over-decrement clamps to 0.
pub fn adjust_individual_quantity(
    selections: &IndividualSelections,
    person_id: &str,
    item_id: &str,
    delta: i64,
) -> IndividualSelections {
    selections.adjusted(person_id, item_id, delta)
}

/// Returns new shared selections with `delta` applied to one item.
///
/// A result of 0 removes the item's key entirely.
pub fn adjust_shared_quantity(
    selections: &SharedSelections,
    item_id: &str,
    delta: i64,
) -> SharedSelections {
    selections.adjusted(item_id, delta)
}

/// Returns empty selections for the snapshot's roster: one empty entry per
/// person and nothing shared. Menu and roster are not part of the result.
pub fn reset_selections(snapshot: &Snapshot) -> (IndividualSelections, SharedSelections) {
    (
        IndividualSelections::empty_for(snapshot.people.iter().map(|p| p.id.as_str())),
        SharedSelections::new(),
    )
}

// =============================================================================
// Engine
// =============================================================================

/// Read-only allocation view over a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AllocationEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> AllocationEngine<'a> {
    /// Creates an engine over `snapshot`.
    pub fn new(snapshot: &'a Snapshot) -> Self {
        AllocationEngine { snapshot }
    }

    /// The snapshot being allocated.
    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    /// Quantity of one item attributed to one person.
    pub fn individual_quantity(&self, person_id: &str, item_id: &str) -> u32 {
        self.snapshot
            .individual_selections
            .quantity(person_id, item_id)
    }

    /// Shared quantity of one item.
    pub fn shared_quantity(&self, item_id: &str) -> u32 {
        self.snapshot.shared_selections.quantity(item_id)
    }

    /// `Σ over menu items: quantity(person, item) × unit price`.
    ///
    /// Selected ids that are not on the menu contribute nothing.
    pub fn individual_total(&self, person_id: &str) -> Money {
        self.snapshot
            .menu_items
            .iter()
            .map(|item| item.line_total(self.individual_quantity(person_id, &item.id)))
            .sum()
    }

    /// `Σ over menu items: shared quantity × unit price`.
    pub fn shared_total(&self) -> Money {
        self.snapshot
            .menu_items
            .iter()
            .map(|item| item.line_total(self.shared_quantity(&item.id)))
            .sum()
    }

    /// Roster people with at least one non-zero individual quantity, in
    /// roster order.
    ///
    /// Participation is about quantities, not money: any non-zero quantity
    /// counts, even for an id that is not on the menu.
    pub fn participating_people(&self) -> Vec<&'a Person> {
        self.snapshot
            .people
            .iter()
            .filter(|person| self.is_participating(&person.id))
            .collect()
    }

    /// True if `person_id` is on the roster and has ordered something.
    pub fn is_participating(&self, person_id: &str) -> bool {
        self.snapshot.people.iter().any(|p| p.id == person_id)
            && self.snapshot.individual_selections.has_any(person_id)
    }

    /// Shared total divided equally among participants, in major units.
    ///
    /// With no participants this is exactly `0.0`: shared items are then
    /// left unassigned rather than charged to people who were not there.
    pub fn shared_cost_per_participant(&self) -> f64 {
        self.shared_total()
            .split_evenly(self.participating_people().len())
    }

    /// Individual total plus the shared share, in major units.
    ///
    /// `None` for anyone not participating: they are left off the bill
    /// entirely rather than shown with a zero.
    pub fn person_final_total(&self, person_id: &str) -> Option<f64> {
        if !self.is_participating(person_id) {
            return None;
        }
        Some(self.individual_total(person_id).as_major() + self.shared_cost_per_participant())
    }

    /// Sum of participants' individual totals plus the shared total.
    pub fn grand_total(&self) -> Money {
        let individual: Money = self
            .participating_people()
            .into_iter()
            .map(|person| self.individual_total(&person.id))
            .sum();
        individual + self.shared_total()
    }

    /// The grand total computed item by item:
    /// `Σ over menu items: total_quantity(item) × unit price`.
    ///
    /// Always equal to [`grand_total`](Self::grand_total).
    pub fn grand_total_by_item(&self) -> Money {
        self.snapshot
            .menu_items
            .iter()
            .map(|item| item.line_total(self.total_quantity_for_item(&item.id)))
            .sum()
    }

    /// Individual quantities of one item across the roster.
    ///
    /// Summed as `u64`: several people can each hold up to `u32::MAX`.
    pub fn individual_quantity_for_item(&self, item_id: &str) -> u64 {
        self.snapshot
            .people
            .iter()
            .map(|person| u64::from(self.individual_quantity(&person.id, item_id)))
            .sum()
    }

    /// Individual quantities across the roster plus the shared quantity.
    ///
    /// An item appears on the itemized bill iff this is non-zero.
    pub fn total_quantity_for_item(&self, item_id: &str) -> u64 {
        self.individual_quantity_for_item(item_id)
            .saturating_add(u64::from(self.shared_quantity(item_id)))
    }

    /// Per-person hint shown while picking shared items: the item's shared
    /// cost divided by the WHOLE roster, in major units.
    ///
    /// This intentionally does not match the final bill, which divides by
    /// participants only (see [`shared_cost_per_participant`]). Use it for
    /// previews, never for amounts owed.
    ///
    /// [`shared_cost_per_participant`]: Self::shared_cost_per_participant
    pub fn roster_preview_share(&self, item_id: &str) -> f64 {
        self.snapshot
            .menu_items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| {
                item.line_total(self.shared_quantity(item_id))
                    .split_evenly(self.snapshot.people.len())
            })
            .unwrap_or(0.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
