//! # Ordering Commands
//!
//! Quantity changes: `order`, `share`, `reset`.
//!
//! ## Quantity Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order Akhil Puri              quantity 0 ──► 1                        │
//! │  order Akhil Puri --delta 2    quantity 1 ──► 3                        │
//! │  order Akhil Puri --delta -5   quantity 3 ──► 0   (clamped, no error)  │
//! │                                                                         │
//! │  share Tea                     shared 0 ──► 1                          │
//! │  share Tea --delta -1          shared 1 ──► 0   (entry removed)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names resolve by id first, then case-insensitively by name. An unknown
//! name is a `NOT_FOUND` error and nothing is saved.

use canteen_core::Money;
use canteen_store::{BillSession, SnapshotStore};
use serde::Serialize;
use tracing::debug;

use super::Render;
use crate::error::CliResult;
use crate::state::ConfigState;

/// Result of `order`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub person_id: String,
    pub person: String,
    pub item_id: String,
    pub item: String,
    pub quantity: u32,
    /// The person's individual total after the change
    pub individual_total: Money,
}

impl Render for OrderResponse {
    fn render_text(&self, config: &ConfigState) -> String {
        format!(
            "{} now has {} x {} (individual total {})",
            self.person,
            self.quantity,
            self.item,
            config.format_money(self.individual_total)
        )
    }
}

/// Result of `share`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub item_id: String,
    pub item: String,
    pub quantity: u32,
    pub shared_total: Money,
    pub participants: usize,
    pub shared_per_participant: f64,
}

impl Render for ShareResponse {
    fn render_text(&self, config: &ConfigState) -> String {
        let mut out = format!(
            "Shared {} x {} (shared total {})",
            self.quantity,
            self.item,
            config.format_money(self.shared_total)
        );
        if self.participants == 0 {
            if !self.shared_total.is_zero() {
                out.push_str("\nNobody has ordered yet, so the shared cost is not assigned.");
            }
        } else {
            out.push_str(&format!(
                "\nSplit between {} participant(s): {} each",
                self.participants,
                config.format_amount(self.shared_per_participant)
            ));
        }
        out
    }
}

/// Result of `reset`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub menu_items: usize,
    pub people: usize,
    pub grand_total: Money,
}

impl Render for ResetResponse {
    fn render_text(&self, _config: &ConfigState) -> String {
        format!(
            "All quantities cleared. Kept {} menu items and {} people.",
            self.menu_items, self.people
        )
    }
}

/// Changes one person's quantity of one item.
pub async fn order<S: SnapshotStore>(
    session: &mut BillSession<S>,
    person: &str,
    item: &str,
    delta: i64,
) -> CliResult<OrderResponse> {
    debug!(person = %person, item = %item, delta = %delta, "order command");

    let quantity = session.adjust_individual(person, item, delta).await?;

    let snapshot = session.snapshot();
    let person = snapshot.require_person(person)?;
    let item = snapshot.require_item(item)?;
    Ok(OrderResponse {
        person_id: person.id.clone(),
        person: person.name.clone(),
        item_id: item.id.clone(),
        item: item.name.clone(),
        quantity,
        individual_total: session.engine().individual_total(&person.id),
    })
}

/// Changes the shared quantity of one item.
pub async fn share<S: SnapshotStore>(
    session: &mut BillSession<S>,
    item: &str,
    delta: i64,
) -> CliResult<ShareResponse> {
    debug!(item = %item, delta = %delta, "share command");

    let quantity = session.adjust_shared(item, delta).await?;

    let item = session.snapshot().require_item(item)?;
    let engine = session.engine();
    Ok(ShareResponse {
        item_id: item.id.clone(),
        item: item.name.clone(),
        quantity,
        shared_total: engine.shared_total(),
        participants: engine.participating_people().len(),
        shared_per_participant: engine.shared_cost_per_participant(),
    })
}

/// Clears all quantities, keeping the menu and roster.
pub async fn reset<S: SnapshotStore>(session: &mut BillSession<S>) -> CliResult<ResetResponse> {
    debug!("reset command");
    session.reset().await?;

    let snapshot = session.snapshot();
    Ok(ResetResponse {
        menu_items: snapshot.menu_items.len(),
        people: snapshot.people.len(),
        grand_total: session.engine().grand_total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use canteen_core::Snapshot;
    use canteen_store::MemoryStore;

    async fn canteen() -> BillSession<MemoryStore> {
        BillSession::open(MemoryStore::new(), Snapshot::canteen_defaults)
            .await
            .unwrap()
    }

    fn config() -> ConfigState {
        ConfigState::from_lookup(|_| None)
    }

    #[tokio::test]
    async fn test_order_by_name_and_id() {
        let mut session = canteen().await;

        let first = order(&mut session, "akhil", "puri", 1).await.unwrap();
        assert_eq!(first.person_id, "1");
        assert_eq!(first.item, "Puri");
        assert_eq!(first.quantity, 1);

        let second = order(&mut session, "1", "1", 1).await.unwrap();
        assert_eq!(second.quantity, 2);
        assert_eq!(second.individual_total, Money::from_major(16));
        assert_eq!(
            second.render_text(&config()),
            "Akhil now has 2 x Puri (individual total ₹16.00)"
        );
    }

    #[tokio::test]
    async fn test_order_clamps_at_zero() {
        let mut session = canteen().await;
        order(&mut session, "Riyas", "Egg", 1).await.unwrap();

        let response = order(&mut session, "Riyas", "Egg", -5).await.unwrap();
        assert_eq!(response.quantity, 0);
        assert_eq!(response.individual_total, Money::zero());
    }

    #[tokio::test]
    async fn test_unknown_names_are_not_found() {
        let mut session = canteen().await;

        let err = order(&mut session, "Nobody", "Puri", 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        let err = share(&mut session, "Biriyani", 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        // Nothing was written.
        assert!(session.store().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_share_splits_among_participants() {
        let mut session = canteen().await;

        let unassigned = share(&mut session, "Tea", 1).await.unwrap();
        assert_eq!(unassigned.participants, 0);
        assert_eq!(unassigned.shared_per_participant, 0.0);
        assert!(unassigned.render_text(&config()).contains("not assigned"));

        order(&mut session, "Akhil", "Puri", 2).await.unwrap();
        order(&mut session, "Riyas", "Dosa", 1).await.unwrap();
        let response = share(&mut session, "Tea", 1).await.unwrap();

        assert_eq!(response.quantity, 2);
        assert_eq!(response.shared_total, Money::from_major(18));
        assert_eq!(response.participants, 2);
        assert_eq!(response.shared_per_participant, 9.0);
    }

    #[tokio::test]
    async fn test_reset_keeps_menu_and_roster() {
        let mut session = canteen().await;
        order(&mut session, "Akhil", "Puri", 2).await.unwrap();
        share(&mut session, "Coffee", 1).await.unwrap();

        let response = reset(&mut session).await.unwrap();
        assert_eq!(response.menu_items, 10);
        assert_eq!(response.people, 5);
        assert_eq!(response.grand_total, Money::zero());
        assert!(session.snapshot().shared_selections.is_empty());
    }
}
