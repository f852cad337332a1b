//! # Bill Views
//!
//! Read models built from the [`AllocationEngine`] for the screens that
//! display totals: the person picker and the final bill.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FINAL BILL                                          ₹25.00            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Items Ordered                                                          │
//! │    Puri                                   2 × ₹8.00        ₹16.00      │
//! │    Tea      (1 shared)                    1 × ₹9.00         ₹9.00      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Individual Amounts                                                     │
//! │    Akhil    ₹16.00 individual + ₹9.0 shared               ₹25.0        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only items with a non-zero total quantity and only participating people
//! are listed. Amounts are unrounded; formatting is left to the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::allocation::AllocationEngine;
use crate::money::Money;

/// How one item's quantity splits between individual and shared orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemBreakdown {
    /// Sum over the roster, so wider than a single selection.
    pub individual_quantity: u64,
    pub shared_quantity: u32,
    pub total_quantity: u64,
    pub line_total: Money,
}

/// One row of the itemized bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Money,
    #[serde(flatten)]
    pub breakdown: ItemBreakdown,
}

/// One participating person's amount owed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonLine {
    pub person_id: String,
    pub name: String,
    pub individual_total: Money,
    /// Equal share of the shared total, in major units.
    pub shared_share: f64,
    /// `individual_total + shared_share`, in major units.
    pub final_total: f64,
}

/// A roster entry on the person picker, participating or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonSummary {
    pub person_id: String,
    pub name: String,
    pub individual_total: Money,
    pub participating: bool,
}

/// The complete final bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FinalBill {
    pub grand_total: Money,
    pub shared_total: Money,
    /// Shared total per participant, in major units (0 with no participants).
    pub shared_per_participant: f64,
    /// Items with a non-zero total quantity, in menu order.
    pub items: Vec<ItemLine>,
    /// Participating people, in roster order.
    pub people: Vec<PersonLine>,
}

impl FinalBill {
    /// True when shared items exist but nobody ordered individually, so the
    /// shared cost is not charged to anyone.
    pub fn has_unassigned_shared_cost(&self) -> bool {
        self.people.is_empty() && self.shared_total.is_positive()
    }
}

impl<'a> AllocationEngine<'a> {
    /// Individual/shared quantities and line total for one item.
    pub fn item_breakdown(&self, item_id: &str) -> ItemBreakdown {
        let individual_quantity = self.individual_quantity_for_item(item_id);
        let shared_quantity = self.shared_quantity(item_id);
        let total_quantity = self.total_quantity_for_item(item_id);
        let line_total = self
            .snapshot()
            .menu_items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.line_total(total_quantity))
            .unwrap_or_default();

        ItemBreakdown {
            individual_quantity,
            shared_quantity,
            total_quantity,
            line_total,
        }
    }

    /// Individual totals for the whole roster, in roster order.
    pub fn roster_summary(&self) -> Vec<PersonSummary> {
        self.snapshot()
            .people
            .iter()
            .map(|person| PersonSummary {
                person_id: person.id.clone(),
                name: person.name.clone(),
                individual_total: self.individual_total(&person.id),
                participating: self.is_participating(&person.id),
            })
            .collect()
    }

    /// Builds the final bill.
    pub fn final_bill(&self) -> FinalBill {
        let shared_per_participant = self.shared_cost_per_participant();

        let items = self
            .snapshot()
            .menu_items
            .iter()
            .filter_map(|item| {
                let breakdown = self.item_breakdown(&item.id);
                (breakdown.total_quantity > 0).then(|| ItemLine {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    breakdown,
                })
            })
            .collect();

        let people = self
            .participating_people()
            .into_iter()
            .map(|person| {
                let individual_total = self.individual_total(&person.id);
                PersonLine {
                    person_id: person.id.clone(),
                    name: person.name.clone(),
                    individual_total,
                    shared_share: shared_per_participant,
                    final_total: individual_total.as_major() + shared_per_participant,
                }
            })
            .collect();

        FinalBill {
            grand_total: self.grand_total(),
            shared_total: self.shared_total(),
            shared_per_participant,
            items,
            people,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
